//! Integration tests for graph_poet

use graph_poet::*;
use std::io::Write;

/// Sample corpus for testing
const SAMPLE_CORPUS: &str = r#"
This is a test of the Mugar Omni Theater sound system.
It is a test of how well the system can
write poems that make you think and write more.
You can do it if you write every day.
"#;

fn poet(backing: Backing) -> GraphPoet {
    GraphPoet::from_text(SAMPLE_CORPUS, &PoetConfig::new().with_backing(backing)).unwrap()
}

#[test]
fn test_full_pipeline() {
    // Tokenize
    let lines = Tokenizer::new().tokenize_lines(SAMPLE_CORPUS);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0][0], "this");

    // Build graph
    let graph = AffinityGraphBuilder::new()
        .build(&lines, Backing::Adjacency)
        .unwrap();
    assert!(!graph.is_empty());
    assert_eq!(graph.weight(&"a".to_string(), &"test".to_string()), Some(2));
    assert_eq!(graph.weight(&"test".to_string(), &"of".to_string()), Some(2));

    // Generate
    let poem = PoemGenerator::new().generate(&*graph, "Test the system.");
    assert_eq!(poem.text(), "Test of the system.");
}

#[test]
fn test_documented_example() {
    let corpus = "To explore strange new worlds\nTo seek out new life and new civilizations";
    let poet = GraphPoet::from_text(corpus, &PoetConfig::default()).unwrap();

    assert_eq!(
        poet.poem("Seek to explore new and exciting synergies!"),
        "Seek to explore strange new life and exciting synergies!"
    );
}

#[test]
fn test_multiple_bridges_across_backings() {
    for backing in Backing::ALL {
        let poet = poet(backing);
        // Directly adjacent in the corpus but with no two-step path.
        let poem = poet.poem_with_bridges("you CAN do");
        assert_eq!(poem.text(), "you CAN do");
        assert!(poem.bridges.is_empty());

        let poem = poet.poem_with_bridges("Make Think");
        assert_eq!(poem.text(), "Make you Think");
        assert_eq!(poem.bridges.len(), 1);
    }
}

#[test]
fn test_words_from_corpus() {
    let poet = poet(Backing::EdgeList);
    let words = poet.words();

    assert_eq!(words.first().map(String::as_str), Some("this"));
    assert!(words.contains(&"mugar".to_string()));
    assert!(words.iter().all(|w| *w == w.to_lowercase()));
    assert_eq!(
        words.len(),
        SAMPLE_CORPUS.split_whitespace().count()
    );
}

#[test]
fn test_single_word_unchanged() {
    let poet = poet(Backing::Adjacency);
    assert_eq!(poet.poem("Java"), "Java");
    assert_eq!(poet.poem(""), "");
}

#[test]
fn test_unknown_words_never_fail() {
    let poet = poet(Backing::Adjacency);
    assert_eq!(poet.poem("zebra quantum"), "zebra quantum");
    assert_eq!(poet.poem("a zebra test"), "a zebra test");
}

#[test]
fn test_lines_do_not_join_by_default() {
    // "system." ends line 1 and "it" starts line 2
    let joined = GraphPoet::from_text(
        SAMPLE_CORPUS,
        &PoetConfig::new().with_span_lines(true),
    )
    .unwrap();
    let separate = poet(Backing::Adjacency);

    let system = "system.".to_string();
    let it = "it".to_string();
    assert_eq!(separate.graph().weight(&system, &it), None);
    assert_eq!(joined.graph().weight(&system, &it), Some(1));
}

#[test]
fn test_from_file() {
    let path = std::env::temp_dir().join(format!("graph_poet_corpus_{}.txt", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE_CORPUS.as_bytes()).unwrap();
    }

    let from_file = GraphPoet::from_file(&path, &PoetConfig::default()).unwrap();
    let from_text = poet(Backing::Adjacency);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(from_file.words(), from_text.words());
    assert_eq!(from_file.to_string(), from_text.to_string());
}

#[test]
fn test_config_from_json_drives_poet() {
    let config = PoetConfig::from_json(r#"{"backing": "edge_list", "min_bridge_weight": 2}"#).unwrap();
    let poet = GraphPoet::from_text(SAMPLE_CORPUS, &config).unwrap();

    // a -> test has weight 2
    assert_eq!(poet.poem("a of"), "a test of");
    // of -> the has weight 1, below the threshold
    assert_eq!(poet.poem("of system"), "of system");
}

#[test]
fn test_graph_mutation_after_build() {
    let lines = Tokenizer::new().tokenize_lines(SAMPLE_CORPUS);
    let mut graph = AffinityGraphBuilder::new()
        .build(&lines, Backing::EdgeList)
        .unwrap();
    let generator = PoemGenerator::new();
    assert_eq!(generator.poem(&*graph, "a of"), "a test of");

    assert!(graph.remove(&"test".to_string()));
    assert_eq!(generator.poem(&*graph, "a of"), "a of");
}
