#[path = "integration_tests/cmdline.rs"]
mod cmdline;
#[path = "integration_tests/ellipse.rs"]
mod ellipse;
#[path = "integration_tests/golden.rs"]
mod golden;
#[path = "integration_tests/normalize.rs"]
mod normalize;
#[path = "integration_tests/path.rs"]
mod path;
#[path = "integration_tests/rect.rs"]
mod rect;
#[path = "integration_tests/strict.rs"]
mod strict;
#[path = "integration_tests/text.rs"]
mod text;
#[path = "integration_tests/transform.rs"]
mod transform;
