// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_post_body(sections: usize) -> String {
    let base = "## Section\n\nParagraph with **bold**, *italic* and a [link](https://example.com).\n\n- Bullet point\n- Another item\n\n```rust demo.rs\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n!CALLOUT: info [Remember this]\n!IMAGE: Diagram [https://cdn.example.com/d.png]\n!GALLERY: Trip [a.jpg, b.jpg, c.jpg]\n\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_prose(paragraphs: usize) -> String {
    let mut content = String::new();
    for i in 0..paragraphs {
        content.push_str(&format!("### Heading {i}\n\n"));
        content.push_str("Some **bold** text with *emphasis* and a [link](https://example.com/page).\n");
        content.push_str("আমার সোনার বাংলা, আমি তোমায় ভালোবাসি।\n\n");
        content.push_str("* first\n* second\n\n");
    }
    content
}
