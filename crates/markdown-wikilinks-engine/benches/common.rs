// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title about [[Home]]\n\n## Section\n\nParagraph with some content and a [[Wiki Link]].\n\n- Bullet point linking [[Other Page]]\n- Another item with `[[code]]`\n\n```rust\nfn example() {\n    println!(\"[[not a link]]\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_linked_notes(notes: usize) -> String {
    let mut content = String::new();

    for note in 0..notes {
        content.push_str(&format!("# Note {note}\n\n"));
        content.push_str(&format!(
            "See [[Note {}]] and [[Note {}]] for more.\nThis line continues the paragraph.\n\n",
            note + 1,
            note + 2
        ));
        content.push_str("> Quoted [[Source]] material\n\n");
    }

    content
}
