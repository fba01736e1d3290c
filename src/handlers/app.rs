/// Body returned by `GET /`. Tests assert against this exact value.
pub const GREETING: &str = "Testing the workflow!";

pub async fn index() -> &'static str {
    GREETING
}
