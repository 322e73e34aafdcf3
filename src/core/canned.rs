//! Fixed answers that short-circuit numeric dispatch

pub const SHAKESPEARE_BIOGRAPHY: &str = "William Shakespeare (26 April 1564 - 23 April 1616) was an \
English poet, playwright, and actor, widely regarded as the greatest \
writer in the English language and the world's pre-eminent dramatist.";

pub const NAME_RESPONSE: &str = "Rohan";

pub const ANDREW_ID_RESPONSE: &str = "yuqizou";

/// Trigger keyword and response, checked in order
pub const CANNED_RESPONSES: &[(&str, &str)] = &[
    ("shakespeare", SHAKESPEARE_BIOGRAPHY),
    ("name", NAME_RESPONSE),
    ("andrew id", ANDREW_ID_RESPONSE),
];

/// Look up the canned response for the first trigger found in the query
pub fn canned_response(query: &str) -> Option<&'static str> {
    let lower = query.to_lowercase();

    CANNED_RESPONSES
        .iter()
        .find(|(trigger, _)| lower.contains(trigger))
        .map(|(_, response)| *response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shakespeare_any_case() {
        let response = canned_response("Tell me about SHAKESPEARE.").unwrap();
        assert!(response.contains("William Shakespeare"));
    }

    #[test]
    fn test_name() {
        assert_eq!(canned_response("What's your name?"), Some("Rohan"));
        assert_eq!(canned_response("rename 3 plus 4"), Some("Rohan"));
    }

    #[test]
    fn test_andrew_id() {
        assert_eq!(canned_response("What's your Andrew ID?"), Some("yuqizou"));
    }

    #[test]
    fn test_trigger_order() {
        // Shakespeare outranks name
        let response = canned_response("What was Shakespeare's full name?").unwrap();
        assert!(response.starts_with("William Shakespeare"));
        // name outranks andrew id
        assert_eq!(canned_response("name your andrew id"), Some("Rohan"));
    }

    #[test]
    fn test_no_trigger() {
        assert_eq!(canned_response("What is 1 plus 1?"), None);
        assert_eq!(canned_response("andrewid"), None);
    }
}
