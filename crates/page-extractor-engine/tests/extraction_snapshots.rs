use page_extractor_engine::extract;

#[test]
fn fixture_sections_page() {
    assert_fixture("sections_page");
}

#[test]
fn fixture_command_step() {
    assert_fixture("command_step");
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let result = extract(&md).unwrap();
    insta::assert_debug_snapshot!(name, result);
}
