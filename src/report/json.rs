use serde::Serialize;

pub fn to_json<T: Serialize>(view: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::views;
    use crate::store::parse_assessment;

    #[test]
    fn dashboard_json_uses_portuguese_labels() {
        let assessment =
            parse_assessment("[maf.q1]\nscore = 5\n").expect("assessment should parse");
        let rendered = to_json(&views::dashboard(&assessment)).expect("json should serialize");

        assert!(rendered.contains("\"program\": \"MAF\""));
        assert!(rendered.contains("\"classification\": \"Inadequado\""));
        assert!(rendered.contains("\"progress\": \"bg-red-500\""));
    }

    #[test]
    fn action_plan_json_is_an_array() {
        let assessment = parse_assessment(
            "[iki.iq9]\nscore = 2\ncan_improve = true\naction = \"Map SDG links\"\n",
        )
        .expect("assessment should parse");
        let rendered = to_json(&views::action_plan(&assessment)).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");

        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["program"], "IKI");
        assert_eq!(value[0]["action"], "Map SDG links");
    }
}
