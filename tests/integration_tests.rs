//! Integration tests for the resume matcher

use resume_matcher::config::{KeywordConfig, OutputFormat};
use resume_matcher::input::InputManager;
use resume_matcher::output::formatter::ReportGenerator;
use resume_matcher::output::report::{MatchReport, Seniority};
use resume_matcher::processing::Analyzer;
use resume_matcher::ResumeMatcherError;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jane Roe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("C++"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Roe"));
    assert!(text.contains("machine learning"));
    assert!(text.contains("C++"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(matches!(result, Err(ResumeMatcherError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(matches!(result, Err(ResumeMatcherError::InvalidInput(_))));
}

#[tokio::test]
async fn test_broken_pdf_is_a_parse_error() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/broken.pdf")).await;
    assert!(matches!(result, Err(ResumeMatcherError::DocumentParse(_))));
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_end_to_end_analysis() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/job_description.txt"))
        .await
        .unwrap();

    let analyzer = Analyzer::new(&KeywordConfig::default()).unwrap();
    let analysis = analyzer.analyze(&resume, &job);

    assert_eq!(analysis.summary.total_keywords, 14);
    assert_eq!(analysis.summary.present_count, 10);
    assert_eq!(analysis.summary.score, 71.43);

    let missing: Vec<&str> = analysis.matches.missing.iter().collect();
    assert_eq!(missing, vec!["need", "project management", "required", "sql server"]);

    // "sql" only occurs inside the "sql server" phrase of the job, and "mysql" must not count.
    assert!(!analysis.keywords.contains("sql"));
    assert!(analysis.matches.present.contains("c++"));
    assert!(analysis.matches.present.contains("machine learning"));
}

#[tokio::test]
async fn test_markdown_resume_scores_like_text() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/job_description.txt"))
        .await
        .unwrap();

    let analysis = Analyzer::new(&KeywordConfig::default()).unwrap().analyze(&resume, &job);

    assert!(analysis.matches.present.contains("python"));
    assert!(analysis.matches.present.contains("machine learning"));
    assert!(analysis.matches.missing.contains("sql server"));
}

#[tokio::test]
async fn test_report_rendering_for_every_format() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/job_description.txt"))
        .await
        .unwrap();

    let analysis = Analyzer::new(&KeywordConfig::default()).unwrap().analyze(&resume, &job);
    let report = MatchReport::from_analysis(&analysis, Seniority::Senior, true, "sample_resume.txt", "job_description.txt");
    let generator = ReportGenerator::with_options(false, true, true, true, true);

    for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Html] {
        let rendered = generator.generate_report(&report, &format).unwrap();
        assert!(rendered.contains("sql server"), "{:?} output lacks missing keywords", format);
    }

    let console = generator.generate_report(&report, &OutputFormat::Console).unwrap();
    assert!(console.contains("Match score: 71.43% · JD keywords: 14 · Present: 10 · Missing: 4"));
    assert!(console.contains("leadership"));
}

#[test]
fn test_symbols_separate_words_in_resume() {
    let analysis = resume_matcher::analyze(
        "Front end: HTML+CSS, #python scripting, modern C++11",
        "Looking for html css python c++ skills",
        &KeywordConfig::default(),
    )
    .unwrap();

    let present: Vec<&str> = analysis.matches.present.iter().collect();
    assert_eq!(present, vec!["css", "html", "python"]);

    // "c++11" is one word, so "c++" is not found on its own.
    assert!(analysis.matches.missing.contains("c++"));
    assert_eq!(analysis.summary.total_keywords, 7);
    assert_eq!(analysis.summary.score, 42.86);
}
