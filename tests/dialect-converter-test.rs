use arabic_utils_rs::{
    ConvertOptions, Dialect, DialectConverter, DialectError, DialectPair, DialectTables,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn iraqi_to_msa_test() {
        let input = "شلونك اليوم؟";
        let expected_output = "كيف حالك اليوم؟";
        let converter = DialectConverter::new();
        let actual_output = converter.convert(input, "iraqi", "msa").unwrap();
        assert_eq!(actual_output, expected_output);
    }

    #[test]
    fn levantine_phrase_to_msa_test() {
        let input = "يا ريت بدي روح";
        let expected_output = "أتمنى أريد روح";
        let converter = DialectConverter::new();
        let actual_output = converter.convert(input, "levantine", "msa").unwrap();
        assert_eq!(actual_output, expected_output);
    }

    #[test]
    fn same_dialect_is_identity_test() {
        let input = "كيف حالك؟";
        let converter = DialectConverter::new();
        for dialect in DialectConverter::supported_dialects() {
            let options = ConvertOptions::new(dialect, dialect);
            let actual_output = converter.convert_with_options(input, &options).unwrap();
            assert_eq!(actual_output, input);
        }
    }

    #[test]
    fn same_dialect_with_marks_test() {
        let input = "كيف حالك؟";
        let expected_output = "\u{202B}كيف حالك؟\u{202C}";
        let converter = DialectConverter::new();
        let options = ConvertOptions::new(Dialect::Msa, Dialect::Msa).with_direction_marks(true);
        let actual_output = converter.convert_with_options(input, &options).unwrap();
        assert_eq!(actual_output, expected_output);
    }

    #[test]
    fn whole_word_boundary_test() {
        let converter = DialectConverter::new();
        // شلونك and شلون must not fire inside شلونكم
        let input = "شلونكم اليوم";
        let actual_output = converter.convert(input, "iraqi", "msa").unwrap();
        assert_eq!(actual_output, input);

        let input = "وينك ومكانه";
        let actual_output = converter.convert(input, "gulf", "msa").unwrap();
        assert_eq!(actual_output, input);

        let input = "شلون، وين؟";
        let expected_output = "كيف، أين؟";
        let actual_output = converter.convert(input, "gulf", "msa").unwrap();
        assert_eq!(actual_output, expected_output);
    }

    #[test]
    fn round_trip_mapped_words_test() {
        let input = "أين أنت أريد";
        let converter = DialectConverter::new();
        let egyptian = converter.convert(input, "msa", "egyptian").unwrap();
        assert_eq!(egyptian, "فين أنت عاوز");
        let actual_output = converter.convert(&egyptian, "egyptian", "msa").unwrap();
        assert_eq!(actual_output, input);
    }

    #[test]
    fn empty_input_test() {
        let converter = DialectConverter::new();
        assert_eq!(converter.convert("", "iraqi", "msa").unwrap(), "");
        assert_eq!(converter.convert("", "bogus", "msa").unwrap(), "");
    }

    #[test]
    fn unsupported_dialect_test() {
        let converter = DialectConverter::new();
        match converter.convert("نص", "unsupported", "msa") {
            Err(DialectError::UnsupportedDialect { value, supported }) => {
                assert_eq!(value, "unsupported");
                assert_eq!(supported, vec!["msa", "iraqi", "egyptian", "levantine", "gulf"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn conversion_unavailable_test() {
        let converter = DialectConverter::new();
        match converter.convert("نص", "iraqi", "egyptian") {
            Err(DialectError::ConversionUnavailable { from, to }) => {
                assert_eq!(from, Dialect::Iraqi);
                assert_eq!(to, Dialect::Egyptian);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rtl_marks_test() {
        let input = "شلونك؟";
        let expected_output = "\u{202B}كيف حالك؟\u{202C}";
        let converter = DialectConverter::new();
        let options = ConvertOptions::new(Dialect::Iraqi, Dialect::Msa).with_direction_marks(true);
        let actual_output = converter.convert_with_options(input, &options).unwrap();
        assert_eq!(actual_output, expected_output);

        let options = ConvertOptions {
            preserve_direction: false,
            ..options
        };
        let actual_output = converter.convert_with_options(input, &options).unwrap();
        assert_eq!(actual_output, "كيف حالك؟");
    }

    #[test]
    fn conversion_stats_test() {
        let original = "شلونك اليوم؟";
        let converter = DialectConverter::new();
        let converted = converter.convert(original, "iraqi", "msa").unwrap();
        let stats =
            DialectConverter::conversion_stats(original, &converted, Dialect::Iraqi, Dialect::Msa);

        assert_eq!(stats.original_length, 12);
        assert_eq!(stats.converted_length, 15);
        assert_eq!(stats.original_words, 2);
        assert_eq!(stats.converted_words, 3);
        assert_eq!(stats.changed_characters, 15);
        assert_eq!(stats.conversion_ratio, "125.00%");

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["from"], "iraqi");
        assert_eq!(json["to"], "msa");
        assert_eq!(json["direction"], "rtl");
        assert_eq!(json["changedCharacters"], 15);
    }

    #[test]
    fn custom_mapping_test() {
        let mut converter = DialectConverter::new();
        converter
            .add_custom_mapping("iraqi", "msa", "هسه", "الآن")
            .unwrap();
        let actual_output = converter.convert("هسه وين", "iraqi", "msa").unwrap();
        assert_eq!(actual_output, "الآن أين");

        converter
            .add_custom_mapping("iraqi", "egyptian", "شلونك", "إزيك")
            .unwrap();
        let conversions = converter.available_conversions();
        assert_eq!(conversions.len(), 9);
        assert_eq!(
            conversions[8],
            DialectPair::new(Dialect::Iraqi, Dialect::Egyptian)
        );
        let actual_output = converter.convert("شلونك", "iraqi", "egyptian").unwrap();
        assert_eq!(actual_output, "إزيك");
    }

    #[test]
    fn custom_mapping_rejects_invalid_input_test() {
        let mut converter = DialectConverter::new();
        assert!(matches!(
            converter.add_custom_mapping("test", "msa", "تيست", "اختبار"),
            Err(DialectError::UnsupportedDialect { .. })
        ));
        assert!(matches!(
            converter.add_custom_mapping("iraqi", "msa", " ", "اختبار"),
            Err(DialectError::EmptySourceWord)
        ));
        assert_eq!(converter.available_conversions().len(), 8);
    }

    #[test]
    fn available_conversions_test() {
        let converter = DialectConverter::new();
        let conversions = converter.available_conversions();
        assert_eq!(conversions.len(), 8);
        assert!(conversions.contains(&DialectPair::new(Dialect::Gulf, Dialect::Msa)));
        assert!(conversions.contains(&DialectPair::new(Dialect::Msa, Dialect::Levantine)));
    }

    #[test]
    fn options_from_json_test() {
        let options: ConvertOptions =
            serde_json::from_str(r#"{"from":"gulf","to":"msa","addDirectionMarks":true}"#).unwrap();
        assert_eq!(options.from, Dialect::Gulf);
        assert!(options.preserve_direction);
        assert!(options.add_direction_marks);
    }

    #[test]
    fn convert_batch_test() {
        let converter = DialectConverter::new();
        let inputs = vec!["شلونك".to_string(); 200];
        let options = ConvertOptions::new(Dialect::Iraqi, Dialect::Msa);
        let actual_output = converter.convert_batch(&inputs, &options).unwrap();
        assert_eq!(actual_output.len(), 200);
        assert!(actual_output.iter().all(|s| s == "كيف حالك"));

        let small = ["وين", "شنو"];
        let actual_output = converter.convert_batch(&small, &options).unwrap();
        assert_eq!(actual_output, vec!["أين", "ماذا"]);
    }

    #[test]
    fn shared_across_threads_test() {
        let converter = Arc::new(DialectConverter::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let converter = Arc::clone(&converter);
                thread::spawn(move || converter.convert("فين", "egyptian", "msa").unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "أين");
        }
    }

    #[test]
    fn tables_from_dicts_test() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("IraqiToMsa.txt"), "زين\tجيد\n").unwrap();
        fs::write(dir.path().join("EgyptianToMsa.txt"), "فين\tأين\n").unwrap();
        fs::write(dir.path().join("LevantineToMsa.txt"), "هلق\tالآن\n").unwrap();
        fs::write(dir.path().join("GulfToMsa.txt"), "وايد\tكثيراً\n").unwrap();

        let tables = DialectTables::from_dicts(dir.path()).unwrap();
        let converter = DialectConverter::with_tables(tables);
        assert_eq!(converter.convert("زين", "iraqi", "msa").unwrap(), "جيد");
        assert_eq!(converter.convert("كثيراً", "msa", "gulf").unwrap(), "وايد");
    }

    #[test]
    fn tables_from_missing_dir_test() {
        let result = DialectTables::from_dicts("no/such/dicts");
        assert!(matches!(result, Err(DialectError::Io(_))));
    }

    #[test]
    fn quick_access_convert_test() {
        let actual_output = arabic_utils_rs::convert("إزيك", "egyptian", "msa").unwrap();
        assert_eq!(actual_output, "كيف حالك");
    }
}
