mod common;

use docgen_render::{Vimdoc, VimdocSection, indent, render_vimdoc_api};

fn options_body() -> Vec<String> {
    let mut body = vec!["\n".to_string(), ">lua\n".to_string()];
    let code = vec![
        "require(\"quicker\").setup({\n".to_string(),
        "  foo = 1,\n".to_string(),
        "})\n".to_string(),
    ];
    body.extend(indent(&code, 4));
    body.push("<\n".to_string());
    body
}

#[test]
fn test_render_full_help_file() {
    let mut doc = Vimdoc::new("quicker.txt", "quicker");
    doc.sections.push(VimdocSection::new(
        "Options",
        "quicker-options",
        options_body(),
    ));
    doc.sections.push(VimdocSection::new(
        "API",
        "quicker-api",
        render_vimdoc_api("quicker", &common::functions(), &common::catalog()),
    ));

    let rendered = doc.render().concat();

    insta::assert_snapshot!(rendered.trim_end(), @r#"
*quicker.txt*
*Quicker* *quicker* *quicker.nvim*
--------------------------------------------------------------------------------
CONTENTS                                                      *quicker-contents*

  1. Options                                                   |quicker-options|
  2. API                                                           |quicker-api|

--------------------------------------------------------------------------------
OPTIONS                                                        *quicker-options*

>lua
    require("quicker").setup({
      foo = 1,
    })
<

--------------------------------------------------------------------------------
API                                                                *quicker-api*

toggle({opts})                                                  *quicker.toggle*
    Toggle the quickfix or loclist window.

    Parameters:
      {opts} `nil|quicker.OpenOpts`
          {loclist} `nil|boolean` Toggle the loclist instead of the quickfix list

get_winid({bufnr}): nil|integer                              *quicker.get_winid*
    Find the window.

    Parameters:
      {bufnr} `integer` Buffer number

    Returns:
      `nil|integer` winid


================================================================================
vim:tw=80:ts=2:ft=help:norl:syntax=help:
"#);
}

#[test]
fn test_lines_never_exceed_width_when_tags_fit() {
    let doc = Vimdoc::new("quicker.txt", "quicker");
    for line in doc.render() {
        assert!(line.trim_end_matches('\n').chars().count() <= 80, "{line:?}");
    }
}

#[test]
fn test_empty_document_has_header_and_modeline() {
    let lines = Vimdoc::new("quicker.txt", "quicker").render();
    assert_eq!(lines[0], "*quicker.txt*\n");
    assert_eq!(
        lines.last().map(String::as_str),
        Some("vim:tw=80:ts=2:ft=help:norl:syntax=help:\n")
    );
}
