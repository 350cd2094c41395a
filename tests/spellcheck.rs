use std::io::Write;

use spellcheck::{Corpus, Options, SpellChecker};

fn checker() -> SpellChecker {
    SpellChecker::new().unwrap()
}

#[test]
fn test_complete() {
    assert_eq!(
        checker().complete(""),
        [
            "I", "The", "I'm", "You", "My", "It", "But", "If", "This", "It's", "And", "So", "He",
            "A", "Just", "In", "We", "What", "Why", "No"
        ]
    );
}

#[test]
fn test_correct() {
    assert_eq!(checker().correct("wrrong"), "wrong");
}

#[test]
fn test_guess() {
    assert_eq!(checker().guess("aa"), ["as", "era"]);
}

#[test]
fn complete_filters_by_case_sensitive_prefix() {
    let sc = checker();
    assert_eq!(sc.complete("I"), ["I", "I'm", "It", "If", "It's", "In"]);
    assert_eq!(sc.complete("Wh"), ["What", "Why"]);
    assert!(sc.complete("zz").is_empty());
    assert_eq!(sc.complete("wha"), ["what", "whatever"]);
}

#[test]
fn complete_is_sorted_by_frequency() {
    let sc = checker();
    for prefix in ["", "t", "I", "s", "w"] {
        let words = sc.complete(prefix);
        assert!(words.iter().all(|w| w.starts_with(prefix)));
        let ranks: Vec<usize> = words.iter().filter_map(|w| sc.corpus().rank(w)).collect();
        assert_eq!(ranks.len(), words.len());
        assert!(ranks.windows(2).all(|pair| pair[0] < pair[1]));
        let counts: Vec<u64> = words.iter().map(|w| sc.frequency(w)).collect();
        assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}

#[test]
fn complete_respects_limit() {
    let corpus = Corpus::from_text("one two three four five").unwrap();
    let options = Options {
        max_completions: 2,
        ..Options::default()
    };
    let sc = SpellChecker::with_options(corpus, options).unwrap();
    assert_eq!(sc.complete(""), ["one", "two"]);
}

#[test]
fn completion_cap_applies_to_every_prefix() {
    let corpus = Corpus::from_text("tap tip top tub").unwrap();
    let options = Options {
        max_completions: 2,
        ..Options::default()
    };
    let sc = SpellChecker::with_options(corpus, options).unwrap();
    assert_eq!(sc.complete("t"), ["tap", "tip"]);
    assert_eq!(sc.complete("to"), ["top"]);
}

#[test]
fn correct_is_identity_on_known_words() {
    let sc = checker();
    let words: Vec<String> = sc.corpus().iter().map(|e| e.word.clone()).collect();
    for word in &words {
        assert_eq!(&sc.correct(word), word);
    }
}

#[test]
fn correct_uses_each_edit_kind() {
    let sc = checker();
    assert_eq!(sc.correct("tird"), "tired");
    assert_eq!(sc.correct("wrnog"), "wrong");
    assert_eq!(sc.correct("wrnogg"), "wrong");
}

#[test]
fn correct_passes_through_hopeless_input() {
    let sc = checker();
    assert_eq!(sc.correct("qqqqqq"), "qqqqqq");
    assert_eq!(sc.correct(""), "is");
    assert_eq!(sc.correct("日本語"), "日本語");
}

#[test]
fn correct_prefers_frequent_then_first_seen() {
    let sc = SpellChecker::from_text("cart card card cart care").unwrap();
    // "car?" reaches all three; cart and card tie, cart was seen first
    assert_eq!(sc.correct("carx"), "cart");

    let sc = SpellChecker::from_words(["hello", "help", "help"]).unwrap();
    assert_eq!(sc.correct("helo"), "help");
}

#[test]
fn correct_reaches_edits_across_a_transposition() {
    // "ca" -> "ac" -> "abc" is two edits, though three alignment steps
    let sc = SpellChecker::from_text("abc").unwrap();
    assert_eq!(sc.correct("ca"), "abc");
}

#[test]
fn correct_and_guess_return_on_long_input() {
    let sc = checker();
    for word in ["q".repeat(120), "q".repeat(200), "日".repeat(200)] {
        assert_eq!(sc.correct(&word), word);
        assert!(sc.guess(&word).is_empty());
    }
}

#[test]
fn correct_fixes_two_edits_in_a_long_word() {
    let target = "abcdefghij".repeat(15);
    let mut typo: Vec<char> = target.chars().collect();
    typo.remove(10);
    typo[100] = 'z';
    let typo: String = typo.into_iter().collect();

    let sc = SpellChecker::from_words([target.as_str(), "other"]).unwrap();
    assert_eq!(sc.correct(&typo), target);
    assert_eq!(sc.guess(&typo), [target]);
}

#[test]
fn correct_can_stop_at_one_edit() {
    let corpus = Corpus::from_text("wrong").unwrap();
    let options = Options {
        two_edit_corrections: false,
        ..Options::default()
    };
    let sc = SpellChecker::with_options(corpus, options).unwrap();
    assert_eq!(sc.correct("wrnogg"), "wrnogg");
    assert_eq!(sc.correct("wrnog"), "wrong");
}

#[test]
fn guess_orders_by_distance_then_frequency() {
    let sc = checker();
    assert_eq!(
        sc.guess("wrng"),
        ["wrong", "long", "won", "win", "want", "song", "went"]
    );
    assert!(sc.guess("xyzzy").is_empty());
}

#[test]
fn guess_never_returns_the_input() {
    let sc = checker();
    assert_eq!(sc.guess("as"), ["is", "bus", "yes"]);

    let sc = SpellChecker::from_text("solo").unwrap();
    assert!(sc.guess("solo").is_empty());
    assert_eq!(sc.correct("solo"), "solo");
}

#[test]
fn guess_skips_complete_rewrites() {
    let sc = SpellChecker::from_text("ox ab").unwrap();
    // both are two edits from "aa", but "ox" shares nothing with it
    assert_eq!(sc.guess("aa"), ["ab"]);
}

#[test]
fn guess_respects_limit_and_distance() {
    let corpus = Corpus::from_text("bat cat hat mat rat sat chat").unwrap();
    let options = Options {
        max_guesses: 3,
        max_guess_distance: 1,
        ..Options::default()
    };
    let sc = SpellChecker::with_options(corpus, options).unwrap();
    assert_eq!(sc.guess("fat"), ["bat", "cat", "hat"]);
    assert!(sc.guess("fit").is_empty());
}

#[test]
fn empty_corpus_fails_fast() {
    assert!(SpellChecker::from_text("").is_err());
    assert!(SpellChecker::from_text("--- ???").is_err());
    assert!(SpellChecker::from_words(Vec::<&str>::new()).is_err());
}

#[test]
fn invalid_options_fail_fast() {
    let corpus = Corpus::from_text("word").unwrap();
    let options = Options {
        alphabet: String::new(),
        ..Options::default()
    };
    assert!(SpellChecker::with_options(corpus, options).is_err());
}

#[test]
fn loads_corpus_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Spelling spelling spelling is hard.").unwrap();

    let sc = SpellChecker::from_path(file.path()).unwrap();
    assert_eq!(sc.correct("speling"), "spelling");
    assert_eq!(sc.frequency("spelling"), 2);
    assert!(sc.known("Spelling"));
    assert!((sc.probability("is") - 0.2).abs() < 1e-9);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = SpellChecker::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn checker_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SpellChecker>();

    let sc = checker();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| sc.correct("wrrong"))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "wrong");
        }
    });
}
