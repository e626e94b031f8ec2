use super::*;

#[test]
fn editor_endpoint_formats_expected_path() {
    assert_eq!(editor_endpoint("demo"), "/api/editor?project=demo");
}

#[test]
fn editor_request_failed_message_formats_status() {
    assert_eq!(editor_request_failed_message(400), "editor request failed: 400");
}

#[test]
fn invalid_project_message_quotes_input() {
    assert_eq!(invalid_project_message("a b"), "invalid project id: \"a b\"");
}
