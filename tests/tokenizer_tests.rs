use spartrack_recommender::{normalize_text, normalize_value, tokenize, tokenize_value};

#[cfg(test)]
mod normalizer_tests {
    use super::*;

    #[test]
    fn test_lower_cases_text() {
        assert_eq!(normalize_text("Computer SCIENCE"), "computer science");
    }

    #[test]
    fn test_replaces_symbols_with_spaces() {
        assert_eq!(normalize_text("UI/UX, Figma & C#"), "ui ux figma c");
    }

    #[test]
    fn test_collapses_mixed_whitespace() {
        assert_eq!(
            normalize_text("This  is\n   a test\tstring\n\nwith   mixed   whitespace \n\t"),
            "this is a test string with mixed whitespace"
        );
    }

    #[test]
    fn test_absent_value_is_empty() {
        assert_eq!(normalize_value::<String>(None), "");
    }

    #[test]
    fn test_numeric_values_are_coerced() {
        assert_eq!(normalize_value(Some(&3.0_f32)), "3");
        assert_eq!(normalize_value(Some(&1024_u64)), "1024");
    }
}

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_empty_inputs() {
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize_value::<str>(None), Vec::<String>::new());
        assert_eq!(tokenize_value(Some("")), Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_symbols_become_separators() {
        assert_eq!(tokenize("C++ & Java!"), vec!["c", "java"]);
    }

    #[test]
    fn test_tokenize_with_multiple_spaces() {
        assert_eq!(
            tokenize("React    and   Node     developer"),
            vec!["react", "and", "node", "developer"]
        );
    }

    #[test]
    fn test_tokenize_with_tabs_and_line_breaks() {
        assert_eq!(
            tokenize("Python\tDjango\nPostgreSQL\r\nDocker"),
            vec!["python", "django", "postgresql", "docker"]
        );
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        assert_eq!(
            tokenize("HTML5 and CSS3, ES2015"),
            vec!["html5", "and", "css3", "es2015"]
        );
    }

    #[test]
    fn test_tokenize_splits_mid_word_symbols() {
        assert_eq!(tokenize("Node.js front-end"), vec!["node", "js", "front", "end"]);
    }

    #[test]
    fn test_tokenize_keeps_duplicates() {
        assert_eq!(tokenize("data, Data, DATA"), vec!["data", "data", "data"]);
    }

    #[test]
    fn test_tokenize_only_symbols() {
        assert!(tokenize("!!! --- ???").is_empty());
    }
}
