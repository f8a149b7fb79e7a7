use anyhow::Result;
use dnascout::search::{count_matches, search};
use dnascout::{Algorithm, SearchConfig, SearchError, Sequence};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn write_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    write!(file, "{}", content)?;
    Ok(path)
}

fn config(dir: &TempDir, text: &str, pattern: &str, algorithm: Algorithm) -> Result<SearchConfig> {
    Ok(SearchConfig {
        algorithm,
        sequence_path: write_file(dir, "dna.txt", text)?,
        pattern_path: write_file(dir, "pattern.txt", pattern)?,
        ..Default::default()
    })
}

#[test]
fn test_reference_examples() -> Result<()> {
    let cases = [
        ("AAAA", "AA", 3),
        ("ACGT", "TTTT", 0),
        ("ATCGATCG", "CGATCG", 1),
        ("ACGT", "ACGT", 1),
    ];

    let dir = tempdir()?;
    for (text, pattern, expected) in cases {
        for algorithm in Algorithm::ALL {
            let outcome = search(&config(&dir, text, pattern, algorithm)?)?;
            assert_eq!(outcome.matches, expected, "{algorithm} on {text}/{pattern}");
        }
    }
    Ok(())
}

#[test]
fn test_sanitized_files_with_noise() -> Result<()> {
    let dir = tempdir()?;
    // Lowercase, digits, N and a CRLF ending are all dropped; the second line is ignored
    let text = "acgt NNN 1234 acgt\r\nACGTACGTACGT\n";
    let pattern = "  cg\n";

    for algorithm in Algorithm::ALL {
        let outcome = search(&config(&dir, text, pattern, algorithm)?)?;
        assert_eq!(outcome.text_len, 8);
        assert_eq!(outcome.pattern_len, 2);
        assert_eq!(outcome.matches, 2);
    }
    Ok(())
}

#[test]
fn test_large_sequence_agreement() -> Result<()> {
    let dir = tempdir()?;
    let unit = "ACGTTGCAAC";
    let text = unit.repeat(40_000);
    let pattern = "GCAACACGTT";

    let bf = search(&config(&dir, &text, pattern, Algorithm::BruteForce)?)?;
    let kr = search(&config(&dir, &text, pattern, Algorithm::KarpRabin)?)?;
    assert_eq!(bf.matches, 39_999);
    assert_eq!(bf.matches, kr.matches);

    let stats = kr.stats.expect("Karp-Rabin collects stats");
    assert_eq!(stats.windows, text.len() - pattern.len() + 1);
    assert_eq!(stats.matches, stats.candidates - stats.spurious);
    Ok(())
}

#[test]
fn test_default_capacity_boundary() -> Result<()> {
    let dir = tempdir()?;
    let limit = dnascout::DEFAULT_CAPACITY;

    // Largest accepted sequence holds limit - 2 symbols
    let fits = "A".repeat(limit - 2);
    let outcome = search(&config(&dir, &fits, "AAAA", Algorithm::KarpRabin)?)?;
    assert_eq!(outcome.matches, limit - 5);

    let too_big = "A".repeat(limit - 1);
    let err = search(&config(&dir, &too_big, "AAAA", Algorithm::KarpRabin)?).unwrap_err();
    assert!(matches!(err, SearchError::SequenceTooLarge { .. }));
    Ok(())
}

#[test]
fn test_empty_text() -> Result<()> {
    let dir = tempdir()?;
    for algorithm in Algorithm::ALL {
        let outcome = search(&config(&dir, "", "ACGT", algorithm)?)?;
        assert_eq!(outcome.matches, 0);
        assert_eq!(outcome.text_len, 0);
    }
    Ok(())
}

#[test]
fn test_empty_pattern() -> Result<()> {
    let dir = tempdir()?;
    let err = search(&config(&dir, "ACGT", "\n", Algorithm::BruteForce)?).unwrap_err();
    assert!(matches!(err, SearchError::EmptyPattern));
    Ok(())
}

#[test]
fn test_in_memory_matches_file_search() -> Result<()> {
    let dir = tempdir()?;
    let text = Sequence::from("GATTACAGATTACA");
    let pattern = Sequence::from("ATTA");

    let search_config = config(
        &dir,
        &text.to_string(),
        &pattern.to_string(),
        Algorithm::KarpRabin,
    )?;
    let outcome = search(&search_config)?;
    assert_eq!(
        outcome.matches,
        count_matches(Algorithm::BruteForce, text.as_bytes(), pattern.as_bytes())
    );
    assert_eq!(outcome.matches, 2);
    Ok(())
}
