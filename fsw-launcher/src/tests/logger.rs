use crate::logger::source_location;

use googletest::assert_that;
use googletest::prelude::eq;

// =========================================================================
// Log line source-location suffix
// =========================================================================

#[test]
fn given_record_with_source_when_rendered_then_file_line_suffix() {
    // Given
    let record = log::Record::builder()
        .level(log::Level::Info)
        .file(Some("src/supervisor/lifecycle.rs"))
        .line(Some(42))
        .build();

    // When
    let location = source_location(&record);

    // Then
    assert_that!(location.as_str(), eq("src/supervisor/lifecycle.rs:42"));
}

#[test]
fn given_record_without_source_when_rendered_then_unknown_fallback() {
    // Given
    let record = log::Record::builder().level(log::Level::Warn).build();

    // When
    let location = source_location(&record);

    // Then
    assert_that!(location.as_str(), eq("unknown:0"));
}
