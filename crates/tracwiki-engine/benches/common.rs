// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_wiki_content(size: usize) -> String {
    let base = "= Title =\n\n== Section ==\n\nParagraph with ''some'' '''content''', see ticket:42 and wiki:WikiStart.\n\n  Indented quote\n    nested deeper\n\n> citation with https://trac.edgewall.org\n\n{{{#!rust\nfn example() {\n    println!(\"Hello\");\n}\n}}}\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_link_heavy_paragraph(links: usize) -> String {
    (0..links)
        .map(|i| format!("ticket:{i} wiki:Page{i}, "))
        .collect()
}
