// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point with [a link](/somewhere)\n- Another item\n\n1. First\n2. Second\n\n> A quote with ![an image](/img.png)\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_text(runs: usize) -> String {
    "plain **bold** *italic* `code` [link](/a) ![img](/b.png) ".repeat(runs)
}
