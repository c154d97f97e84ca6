//! Config objects written as JavaScript.
//!
//! The script is parsed, never run. The first of these shapes in source order
//! supplies the config:
//!
//! - `require.config({...})` / `requirejs.config({...})`
//! - `module.exports = {...}`
//! - `var require = {...}` (also `requirejs`, `let`, `const`)
//! - `define({...})`
//!
//! Only literal values survive the conversion: strings, numbers, booleans,
//! `null`, arrays and nested objects. Anything computed is skipped.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    AssignmentExpression, AssignmentTarget, BindingPatternKind, CallExpression, Expression,
    ObjectExpression, ObjectPropertyKind, PropertyKey, VariableDeclarator,
};
use oxc_ast_visit::{Visit, walk};
use oxc_parser::Parser;
use oxc_span::SourceType;
use serde_json::{Map, Number, Value};
use tracing::debug;

/// Global names a RequireJS config may be bound to.
const LOADER_GLOBALS: [&str; 2] = ["require", "requirejs"];

/// Parse `source` and convert its config object to JSON.
///
/// On failure the error is a message suitable for `ConfigError::Parse`.
pub(crate) fn config_object(source: &str, path: &Path) -> Result<Value, String> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(path).unwrap_or_default();
    let parsed = Parser::new(&allocator, source, source_type).parse();

    if !parsed.errors.is_empty() {
        let messages: Vec<String> = parsed.errors.iter().map(ToString::to_string).collect();
        return Err(messages.join(", "));
    }

    let mut finder = ConfigFinder::default();
    finder.visit_program(&parsed.program);
    finder
        .found
        .ok_or_else(|| "no config object literal found".to_string())
}

#[derive(Default)]
struct ConfigFinder {
    found: Option<Value>,
}

impl<'a> Visit<'a> for ConfigFinder {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if self.found.is_some() {
            return;
        }
        if is_config_call(&call.callee) {
            let object = call
                .arguments
                .iter()
                .filter_map(|argument| argument.as_expression())
                .find_map(as_object);
            if let Some(object) = object {
                self.found = Some(object_to_value(object));
                return;
            }
        }
        walk::walk_call_expression(self, call);
    }

    fn visit_assignment_expression(&mut self, assign: &AssignmentExpression<'a>) {
        if self.found.is_some() {
            return;
        }
        if is_module_exports(&assign.left) {
            if let Some(object) = as_object(&assign.right) {
                self.found = Some(object_to_value(object));
                return;
            }
        }
        walk::walk_assignment_expression(self, assign);
    }

    fn visit_variable_declarator(&mut self, declarator: &VariableDeclarator<'a>) {
        if self.found.is_some() {
            return;
        }
        let binds_loader = matches!(
            &declarator.id.kind,
            BindingPatternKind::BindingIdentifier(ident) if LOADER_GLOBALS.contains(&ident.name.as_str())
        );
        if binds_loader {
            if let Some(object) = declarator.init.as_ref().and_then(as_object) {
                self.found = Some(object_to_value(object));
                return;
            }
        }
        walk::walk_variable_declarator(self, declarator);
    }
}

/// `require.config`, `requirejs.config` or `define`.
fn is_config_call(callee: &Expression<'_>) -> bool {
    match callee.without_parentheses() {
        Expression::Identifier(ident) => ident.name.as_str() == "define",
        Expression::StaticMemberExpression(member) => {
            member.property.name.as_str() == "config"
                && matches!(
                    member.object.without_parentheses(),
                    Expression::Identifier(ident) if LOADER_GLOBALS.contains(&ident.name.as_str())
                )
        }
        _ => false,
    }
}

fn is_module_exports(target: &AssignmentTarget<'_>) -> bool {
    match target {
        AssignmentTarget::StaticMemberExpression(member) => {
            member.property.name.as_str() == "exports"
                && matches!(
                    &member.object,
                    Expression::Identifier(ident) if ident.name.as_str() == "module"
                )
        }
        _ => false,
    }
}

fn as_object<'b, 'a>(expr: &'b Expression<'a>) -> Option<&'b ObjectExpression<'a>> {
    match expr.without_parentheses() {
        Expression::ObjectExpression(object) => Some(object),
        _ => None,
    }
}

fn object_to_value(object: &ObjectExpression<'_>) -> Value {
    let mut map = Map::new();
    for property in &object.properties {
        let ObjectPropertyKind::ObjectProperty(property) = property else {
            debug!("skipping spread in config object");
            continue;
        };
        let Some(key) = property_key(&property.key) else {
            debug!("skipping computed key in config object");
            continue;
        };
        match literal_value(&property.value) {
            Some(value) => {
                map.insert(key, value);
            }
            None => debug!(key = %key, "skipping non-literal config value"),
        }
    }
    Value::Object(map)
}

fn property_key(key: &PropertyKey<'_>) -> Option<String> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.to_string()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.to_string()),
        PropertyKey::NumericLiteral(lit) => Some(lit.value.to_string()),
        _ => None,
    }
}

fn literal_value(expr: &Expression<'_>) -> Option<Value> {
    match expr.without_parentheses() {
        Expression::StringLiteral(lit) => Some(Value::String(lit.value.to_string())),
        Expression::NumericLiteral(lit) => Number::from_f64(lit.value).map(Value::Number),
        Expression::BooleanLiteral(lit) => Some(Value::Bool(lit.value)),
        Expression::NullLiteral(_) => Some(Value::Null),
        Expression::ArrayExpression(array) => Some(Value::Array(
            array
                .elements
                .iter()
                .filter_map(|element| element.as_expression())
                .filter_map(literal_value)
                .collect(),
        )),
        Expression::ObjectExpression(object) => Some(object_to_value(object)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(source: &str) -> Result<Value, String> {
        config_object(source, Path::new("config.js"))
    }

    #[test]
    fn module_exports_with_unquoted_keys() {
        let value = parse(
            "module.exports = {\n  baseUrl: 'js',\n  paths: { jquery: 'vendor/jquery.min.js' }\n};",
        )
        .unwrap();
        assert_eq!(
            value,
            json!({ "baseUrl": "js", "paths": { "jquery": "vendor/jquery.min.js" } })
        );
    }

    #[test]
    fn requirejs_config_call_with_mixed_quotes() {
        let value = parse(
            r#"requirejs.config({
  "baseUrl": 'js',
  map: { '*': { foobar: "b" } },
});"#,
        )
        .unwrap();
        assert_eq!(value, json!({ "baseUrl": "js", "map": { "*": { "foobar": "b" } } }));
    }

    #[test]
    fn require_config_and_var_require() {
        let value = parse("require.config({ baseUrl: 'lib' });").unwrap();
        assert_eq!(value["baseUrl"], "lib");

        let value = parse("var require = { baseUrl: 'lib' };").unwrap();
        assert_eq!(value["baseUrl"], "lib");
    }

    #[test]
    fn define_with_object() {
        let value = parse("define({ paths: { a: ['b', 'https://cdn/b'] } });").unwrap();
        assert_eq!(value, json!({ "paths": { "a": ["b", "https://cdn/b"] } }));
    }

    #[test]
    fn first_config_in_source_order_wins() {
        let value = parse(
            "require.config({ baseUrl: 'first' });\nrequire.config({ baseUrl: 'second' });",
        )
        .unwrap();
        assert_eq!(value["baseUrl"], "first");
    }

    #[test]
    fn config_nested_in_a_wrapper_function() {
        let value = parse("(function () {\n  requirejs.config({ baseUrl: 'js' });\n})();").unwrap();
        assert_eq!(value["baseUrl"], "js");
    }

    #[test]
    fn comments_are_ignored() {
        let value = parse(
            "// loader setup\nrequire.config({\n  /* root */ baseUrl: 'js', // trailing\n});",
        )
        .unwrap();
        assert_eq!(value["baseUrl"], "js");
    }

    #[test]
    fn computed_values_are_skipped() {
        let value = parse("module.exports = { baseUrl: root + '/js', paths: { a: 'b' } };").unwrap();
        assert_eq!(value, json!({ "paths": { "a": "b" } }));
    }

    #[test]
    fn unrelated_objects_are_not_configs() {
        let err = parse("var settings = { baseUrl: 'js' };\nfoo({ a: 1 });").unwrap_err();
        assert!(err.contains("no config object literal"));
    }

    #[test]
    fn syntax_errors_are_reported() {
        assert!(parse("module.exports = { baseUrl: ").is_err());
    }
}
