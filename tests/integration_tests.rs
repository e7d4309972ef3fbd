use quickcheck::quickcheck;

use textsnip::{
    reverse_complement, to_array, ArrayFormat, Notice, ReverseComplement, Snippet, TextInput,
    ToArray,
};

// End-to-end: a host hands each snippet a buffer and a notice sink,
// exactly as in the public contract. Everything here goes through the
// crate's exported surface only.

fn host_run(snippet: &dyn Snippet, text: &str) -> (String, Vec<Notice>) {
    let mut buffer = text.to_string();
    let mut notices = Vec::new();
    snippet.run(&mut TextInput::new(&mut buffer, &mut notices));
    (buffer, notices)
}

#[test]
fn test_reverse_complement_host_round() {
    let (text, notices) = host_run(&ReverseComplement, "atgc\nGGCC");
    assert_eq!(text, "GCAT\nGGCC");
    assert!(notices.is_empty());
}

#[test]
fn test_invalid_sequence_leaves_buffer_untouched() {
    let (text, notices) = host_run(&ReverseComplement, "ACGT-ACGT");
    assert_eq!(text, "ACGT-ACGT");
    assert_eq!(notices.len(), 1);
    assert!(matches!(notices[0], Notice::Error(_)));
}

#[test]
fn test_to_array_host_round() {
    let (text, _) = host_run(&ToArray::default(), "/R\nfoo\nbar");
    assert_eq!(text, r#"c("foo","bar")"#);
}

#[test]
fn test_snippets_compose_through_the_same_buffer() {
    let mut buffer = "AAA\nCCC".to_string();
    let mut notices = Vec::new();

    ReverseComplement.run(&mut TextInput::new(&mut buffer, &mut notices));
    assert_eq!(buffer, "TTT\nGGG");

    ToArray::default().run(&mut TextInput::new(&mut buffer, &mut notices));
    assert_eq!(buffer, r#"["TTT","GGG"]"#);
}

fn dna_text(seed: &[u8]) -> String {
    seed.iter()
        .map(|&b| match b % 5 {
            0 => 'A',
            1 => 'T',
            2 => 'C',
            3 => 'G',
            _ => '\n',
        })
        .collect()
}

quickcheck! {
    fn prop_double_reverse_complement_is_identity(seed: Vec<u8>) -> bool {
        let text = dna_text(&seed);
        if text.is_empty() {
            return true;
        }
        let once = reverse_complement(&text).unwrap();
        reverse_complement(&once).unwrap() == text
    }

    fn prop_case_does_not_matter(seed: Vec<u8>) -> bool {
        let text = dna_text(&seed);
        if text.is_empty() {
            return true;
        }
        reverse_complement(&text.to_lowercase()).unwrap()
            == reverse_complement(&text).unwrap()
    }

    fn prop_output_alphabet_is_closed(seed: Vec<u8>) -> bool {
        let text = dna_text(&seed);
        if text.is_empty() {
            return true;
        }
        let out = reverse_complement(&text).unwrap();
        out.len() == text.len() && out.chars().all(|c| "ATCG\n".contains(c))
    }

    fn prop_to_array_item_count_matches_nonblank_lines(seed: Vec<u8>) -> bool {
        let text = dna_text(&seed);
        if text.is_empty() || text.starts_with('/') {
            return true;
        }
        let expected = text.split('\n').filter(|l| !l.trim().is_empty()).count();
        let out = to_array(&text, ArrayFormat::Python).unwrap();
        out.matches('"').count() == expected * 2
    }
}

#[cfg(feature = "serde")]
mod serde_roundtrip {
    use textsnip::{DnaLine, SequenceText};

    #[test]
    fn test_sequences_serialize_as_strings() {
        let line: DnaLine = "atgc".parse().unwrap();
        assert_eq!(serde_json::to_string(&line).unwrap(), "\"ATGC\"");

        let text: SequenceText = "ATGC\nGGCC".parse().unwrap();
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, "\"ATGC\\nGGCC\"");
        assert_eq!(serde_json::from_str::<SequenceText>(&json).unwrap(), text);
    }

    #[test]
    fn test_bad_sequence_fails_to_deserialize() {
        assert!(serde_json::from_str::<DnaLine>("\"ATXG\"").is_err());
    }
}
