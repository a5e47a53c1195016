use serde_json::{json, Value};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// `count` well-formed docs titled "Story 0", "Story 1", ...
pub fn docs(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                json!({
                    "headline": { "main": format!("Story {}", i) },
                    "abstract": format!("Abstract {}", i),
                    "web_url": format!("https://www.nytimes.com/story-{}", i),
                })
            })
            .collect(),
    )
}
