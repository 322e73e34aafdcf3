use crate::config::Config;
use crate::cli::ConfigCommands;
use crate::utils::{OutputStyle, print_success, print_warning, prompt_yes_no};
use anyhow::Result;
use std::path::Path;

/// Run a `config` subcommand against the file at `config_path`
pub fn handle_config_command(
    config: Config,
    config_path: &Path,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config, config_path),
        Some(ConfigCommands::Path) => handle_path_command(config_path),
        Some(ConfigCommands::Reset { yes }) => handle_reset_command(config_path, yes),
        None => handle_config_help(config_path),
    }
}

fn handle_show_command(config: &Config, config_path: &Path) -> Result<()> {
    OutputStyle::print_header("⚙️  Quipster Configuration");

    OutputStyle::print_field("File", &config_path.display().to_string());
    println!("General:");
    OutputStyle::print_field("Color", &config.general.color.to_string());
    OutputStyle::print_field("Pretty JSON", &config.general.pretty_json.to_string());
    OutputStyle::print_field("Log level", &config.general.log_level);

    Ok(())
}

fn handle_path_command(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

fn handle_config_help(config_path: &Path) -> Result<()> {
    OutputStyle::print_header("⚙️  Configuration Management");
    println!("Available configuration commands:");
    println!("  quipster config show          - Show current configuration");
    println!("  quipster config path          - Print configuration file location");
    println!("  quipster config reset [--yes] - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", config_path.display());
    Ok(())
}

fn handle_reset_command(config_path: &Path, yes: bool) -> Result<()> {
    let confirmed = yes
        || prompt_yes_no(
            &format!(
                "Reset {} to defaults? This will overwrite your current settings.",
                config_path.display()
            ),
            &mut std::io::stdin().lock(),
        )?;

    if confirmed {
        reset_config(config_path)?;
        print_success(&format!("Configuration reset to defaults: {}", config_path.display()));
    } else {
        print_warning("Reset cancelled.");
    }
    Ok(())
}

/// Overwrite the file at `config_path` with the default configuration
pub fn reset_config(config_path: &Path) -> Result<Config> {
    let config = Config::default();
    config.save_to(config_path)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn custom_config(path: &Path) -> Config {
        let mut config = Config::default();
        config.general.color = false;
        config.general.pretty_json = true;
        config.general.log_level = "info".to_string();
        config.save_to(path).unwrap();
        config
    }

    #[test]
    fn test_reset_rewrites_named_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        let before = custom_config(&path);
        assert_ne!(before, Config::default());

        handle_config_command(before, &path, Some(ConfigCommands::Reset { yes: true })).unwrap();

        assert_eq!(Config::load_custom(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_reset_leaves_other_files_alone() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target.toml");
        let other = dir.path().join("other.toml");
        custom_config(&target);
        let untouched = custom_config(&other);

        reset_config(&target).unwrap();

        assert_eq!(Config::load_custom(&target).unwrap(), Config::default());
        assert_eq!(Config::load_custom(&other).unwrap(), untouched);
    }

    #[test]
    fn test_path_and_show_accept_custom_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        let config = custom_config(&path);

        handle_config_command(config.clone(), &path, Some(ConfigCommands::Path)).unwrap();
        handle_config_command(config, &path, Some(ConfigCommands::Show)).unwrap();
    }
}
