use name_match::matching::{
    compare_names, is_match, match_emails, match_names, normalize, similarity, tokenize,
};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[test]
fn normalization_is_case_and_diacritic_insensitive() {
    assert_eq!(normalize("José"), normalize("jose"));
    assert_eq!(normalize("JOSE"), normalize("jose"));
    for raw in ["José", "  O'Conner ", "Jean-Pierre", "!!!", ""] {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn degenerate_inputs_return_sentinels() {
    assert_eq!(compare_names("", ""), 1.0);
    assert_eq!(compare_names("John Doe", ""), -1.0);
    assert_eq!(compare_names("!!!", "Brayan Perez"), 0.0);
    assert!(!is_match(compare_names("John Doe", ""), 0.0));
}

#[test]
fn equivalent_spellings_score_one() {
    assert_eq!(compare_names("John Doe", "john doe"), 1.0);
    assert_eq!(compare_names("Jean-Pierre", "Jean Pierre"), 1.0);
    assert_eq!(compare_names("O'Conner", "OConner"), 1.0);
    assert!(compare_names("Jón", "Jon") >= 0.8);
}

#[test]
fn phonetic_tolerance_and_overmatch_prevention() {
    assert!(is_match(compare_names("Perez", "Peres"), 0.8));
    assert!(is_match(compare_names("Johnathan", "Jonathan"), 0.8));
    assert!(!is_match(compare_names("Byron", "Brayan"), 0.8));
    assert!(!is_match(compare_names("Bryan", "Brianne"), 0.8));
    assert!(!is_match(compare_names("A", "B"), 0.5));
    assert!(!is_match(compare_names("Alice", "Charles"), 0.5));
}

#[test]
fn middle_name_tolerance() {
    let long = "Jonathan Alexander Michael Robert William Doe";
    assert!(is_match(compare_names(long, "Jonathan Doe"), 0.8));
    assert!(is_match(compare_names(long, "Alexander Doe"), 0.8));
    assert!(is_match(compare_names(long, "Michael Doe"), 0.8));
}

#[test]
fn similarity_is_symmetric_and_reflexive() {
    let samples = ["Jonathan", "jon@example.com", "Łukasz", "O'Conner", "Brianne"];
    for a in samples {
        assert_eq!(similarity(a, a), 1.0);
        for b in samples {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }
}

#[test]
fn external_capabilities_wrap_the_core() {
    assert_eq!(match_names("Perez", "Peres"), compare_names("Perez", "Peres"));
    assert_eq!(
        match_emails("john@example.com", "jon@example.com"),
        similarity("john@example.com", "jon@example.com")
    );
    assert_eq!(tokenize("Jean-Pierre O'Conner"), vec!["jean", "pierre", "oconner"]);
}

#[test]
fn results_are_reproducible_across_threads() {
    let expected = compare_names("Jonathan Alexander Doe", "Jon Doe");
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| compare_names("Jonathan Alexander Doe", "Jon Doe")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("worker finished"), expected);
    }
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let buffer = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn intermediate_values_are_reported_to_the_scoped_subscriber() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();

    let score = tracing::subscriber::with_default(subscriber, || compare_names("Perez", "Peres"));

    assert_eq!(score, 1.0);
    let output = logs.contents();
    assert!(output.contains("token compared"), "missing token event: {output}");
    assert!(output.contains("phonetic code"), "missing phonetic event: {output}");
    assert!(output.contains("both anchors confirmed"), "missing decision: {output}");
}
