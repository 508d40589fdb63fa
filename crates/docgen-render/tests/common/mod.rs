//! Shared catalog fixture for the render tests.

use docgen_lua::{LuaClass, LuaField, LuaFunction, LuaParam, LuaReturn, TypeCatalog};

pub fn catalog() -> TypeCatalog {
    let mut catalog = TypeCatalog::default();
    catalog.classes.insert(
        "quicker.OpenOpts".into(),
        LuaClass {
            name: "quicker.OpenOpts".into(),
            parent: None,
            fields: vec![LuaField {
                name: "loclist".into(),
                ty: "nil|boolean".into(),
                description: "Toggle the loclist instead of the quickfix list".into(),
            }],
        },
    );
    catalog
}

pub fn functions() -> Vec<LuaFunction> {
    vec![
        LuaFunction {
            name: "toggle".into(),
            module: Some("M".into()),
            params: vec![LuaParam {
                name: "opts".into(),
                ty: "nil|quicker.OpenOpts".into(),
                description: String::new(),
            }],
            summary: vec!["Toggle the quickfix or loclist window.".into()],
            line: 10,
            ..LuaFunction::default()
        },
        LuaFunction {
            name: "get_winid".into(),
            module: Some("M".into()),
            params: vec![LuaParam {
                name: "bufnr".into(),
                ty: "integer".into(),
                description: "Buffer number".into(),
            }],
            returns: vec![LuaReturn {
                ty: "nil|integer".into(),
                name: Some("winid".into()),
                description: String::new(),
            }],
            summary: vec!["Find the window.".into()],
            line: 20,
            ..LuaFunction::default()
        },
    ]
}
