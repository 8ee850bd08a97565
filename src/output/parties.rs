use crate::extract::types::PartyInfo;

pub const PARTIES_NOT_FOUND: &str = "Parties information not found";

/// Upper-case labelled blocks, always petitioners then respondents then
/// advocates; categories without entries are omitted. All-empty input
/// collapses to a single sentinel string.
pub fn format_parties(parties: &PartyInfo) -> String {
    let mut blocks = Vec::new();
    if !parties.petitioners.is_empty() {
        blocks.push(format!("PETITIONERS:\n{}", parties.petitioners.join("\n")));
    }
    if !parties.respondents.is_empty() {
        blocks.push(format!("RESPONDENTS:\n{}", parties.respondents.join("\n")));
    }
    if !parties.advocates.is_empty() {
        blocks.push(format!("ADVOCATES:\n{}", parties.advocates.join("\n")));
    }
    if blocks.is_empty() {
        PARTIES_NOT_FOUND.to_string()
    } else {
        blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_empty_yields_sentinel() {
        assert_eq!(format_parties(&PartyInfo::default()), PARTIES_NOT_FOUND);
    }

    #[test]
    fn single_category_has_no_other_labels() {
        let parties = PartyInfo {
            petitioners: vec!["A".to_string()],
            ..Default::default()
        };
        assert_eq!(format_parties(&parties), "PETITIONERS:\nA");
    }

    #[test]
    fn categories_render_in_fixed_order() {
        let parties = PartyInfo {
            petitioners: vec!["P1".to_string(), "P2".to_string()],
            respondents: vec!["R".to_string()],
            advocates: vec!["Adv".to_string()],
        };
        assert_eq!(
            format_parties(&parties),
            "PETITIONERS:\nP1\nP2\n\nRESPONDENTS:\nR\n\nADVOCATES:\nAdv"
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let parties = PartyInfo {
            respondents: vec!["State".to_string(), "State".to_string()],
            ..Default::default()
        };
        assert_eq!(format_parties(&parties), "RESPONDENTS:\nState\nState");
    }
}
