//! Integration tests for intercepted calls
//!
//! Each test describes a handler the way application code would, then calls
//! it through the wrapper and inspects either the result or the
//! `ValidationError` it produced.

use paramguard_core::{
    Arguments, ParameterOptions, ParameterRegistry, Schema, SchemaResult, Schematic, Violation,
    IS_ARRAY, IS_DEFINED, IS_EMAIL,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
struct BodyDto {
    name: String,
}

impl Schematic for BodyDto {
    fn schema() -> SchemaResult<Arc<Schema>> {
        Schema::shared(
            "BodyDto",
            json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "format": "email"}
                },
                "required": ["name"]
            }),
        )
    }
}

fn body(name: &str) -> Arguments {
    Arguments::new()
        .with(&BodyDto {
            name: name.to_string(),
        })
        .unwrap()
}

#[cfg(test)]
mod declared_schema {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rejects_invalid_email() {
        let registry = Arc::new(ParameterRegistry::new());
        let handler = registry
            .method("test")
            .describe_parameter(0, ParameterOptions::of::<BodyDto>())
            .unwrap()
            .wrap(|_args: Arguments| 123);

        let err = handler.call(body("sds")).unwrap_err();

        assert_eq!(err.message(), "Validation Error");
        assert_eq!(err.len(), 1);
        let violation = &err.validation_errors()[0];
        assert_eq!(violation.property, "name");
        assert_eq!(violation.target, json!({"name": "sds"}));
        assert_eq!(violation.constraint(IS_EMAIL), Some("name must be an email"));
    }

    #[test]
    fn test_returns_original_result() {
        let registry = Arc::new(ParameterRegistry::new());
        let handler = registry
            .method("test")
            .describe_parameter(0, ParameterOptions::of::<BodyDto>())
            .unwrap()
            .wrap(|args: Arguments| args.decode::<BodyDto>(0).map(|b| b.name).unwrap_or_default());

        let result = handler.call(body("sds@dasdas.com")).unwrap();
        assert_eq!(result, "sds@dasdas.com");
    }
}

#[cfg(test)]
mod path_override {
    use super::*;
    use pretty_assertions::assert_eq;

    fn handler(registry: &Arc<ParameterRegistry>) -> paramguard_core::Validated<impl Fn(Arguments) -> i32> {
        registry
            .method("test")
            .describe_parameter(0, ParameterOptions::of::<BodyDto>().map(|o| o.path("body")))
            .unwrap()
            .wrap(|_args: Arguments| 123)
    }

    #[test]
    fn test_missing_path_is_undefined() {
        let registry = Arc::new(ParameterRegistry::new());
        let handler = handler(&registry);

        let err = handler.call(body("asdas")).unwrap_err();

        assert_eq!(err.message(), "Validation Error");
        assert_eq!(
            err.validation_errors(),
            &[Violation::new(json!({"name": "asdas"}), "body")
                .with_constraint(IS_DEFINED, "property body is missing")]
        );
    }

    #[test]
    fn test_resolved_path_passes() {
        let registry = Arc::new(ParameterRegistry::new());
        let handler = handler(&registry);

        let args = Arguments::new().with_value(json!({"body": {"name": "sds@dasdas.com"}}));
        assert_eq!(handler.call(args).unwrap(), 123);
    }

    #[test]
    fn test_resolved_path_is_validated() {
        let registry = Arc::new(ParameterRegistry::new());
        let handler = handler(&registry);

        let args = Arguments::new().with_value(json!({"body": {"name": "sds"}}));
        let err = handler.call(args).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.validation_errors()[0].target, json!({"name": "sds"}));
        assert!(err.validation_errors()[0].has_constraint(IS_EMAIL));
    }

    #[test]
    fn test_path_searches_all_arguments() {
        let registry = Arc::new(ParameterRegistry::new());
        let handler = handler(&registry);

        let args = Arguments::new()
            .with_value(json!({"query": {"page": 1}}))
            .with_value(json!({"body": {"name": "sds@dasdas.com"}}));
        assert_eq!(handler.call(args).unwrap(), 123);
    }

    #[test]
    fn test_nested_path() {
        let registry = Arc::new(ParameterRegistry::new());
        let handler = registry
            .method("nested")
            .parameter(
                0,
                ParameterOptions::schema(BodyDto::schema().unwrap()).path("request.body"),
            )
            .wrap(|_args: Arguments| ());

        let args = Arguments::new().with_value(json!({"request": {"body": null}}));
        let violations = handler.check(&args);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].target, json!(null));
    }
}

#[cfg(test)]
mod array_mode {
    use super::*;
    use pretty_assertions::assert_eq;

    fn users(each: bool) -> ParameterOptions {
        let options = ParameterOptions::of::<BodyDto>().unwrap();
        if each {
            options.each()
        } else {
            options
        }
    }

    #[test]
    fn test_valid_elements_pass() {
        let registry = Arc::new(ParameterRegistry::new());
        let handler = registry
            .method("bulk")
            .parameter(0, users(true))
            .wrap(|args: Arguments| args.get(0).and_then(|v| v.as_array()).map_or(0, Vec::len));

        let args = Arguments::new().with_value(json!([
            {"name": "a@example.com"},
            {"name": "b@example.com"}
        ]));
        assert_eq!(handler.call(args).unwrap(), 2);
    }

    #[test]
    fn test_implied_from_array_argument() {
        let registry = Arc::new(ParameterRegistry::new());
        let handler = registry
            .method("bulk")
            .parameter(0, users(false))
            .wrap(|_args: Arguments| ());

        let args = Arguments::new().with_value(json!([
            {"name": "a@example.com"},
            {"name": "nope"}
        ]));
        let err = handler.call(args).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.validation_errors()[0].property, "name");
        assert_eq!(err.validation_errors()[0].target, json!({"name": "nope"}));
    }

    #[test]
    fn test_non_array_is_rejected() {
        let registry = Arc::new(ParameterRegistry::new());
        let handler = registry
            .method("bulk")
            .parameter(0, users(true))
            .wrap(|_args: Arguments| ());

        let err = handler.call(body("a@example.com")).unwrap_err();
        assert_eq!(
            err.validation_errors(),
            &[Violation::new(json!({"name": "a@example.com"}), "0")
                .with_constraint(IS_ARRAY, "input param must be array")]
        );
    }

    #[test]
    fn test_element_violations_keep_order() {
        let registry = Arc::new(ParameterRegistry::new());
        let handler = registry
            .method("bulk")
            .parameter(0, users(true))
            .wrap(|_args: Arguments| ());

        let args = Arguments::new().with_value(json!([{"name": "first"}, {}, {"name": "third"}]));
        let violations = handler.check(&args);
        let targets: Vec<_> = violations.iter().map(|v| v.target.clone()).collect();
        assert_eq!(
            targets,
            vec![json!({"name": "first"}), json!({}), json!({"name": "third"})]
        );
        assert!(violations[1].has_constraint(IS_DEFINED));
    }
}

#[cfg(test)]
mod aggregation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collects_across_parameters() {
        let registry = Arc::new(ParameterRegistry::new());
        let page = Schema::shared("Page", json!({"type": "integer", "minimum": 1})).unwrap();
        let handler = registry
            .method("list")
            .parameter(0, ParameterOptions::of::<BodyDto>().unwrap())
            .parameter(1, ParameterOptions::schema(page).named("page"))
            .wrap(|_args: Arguments| ());

        let args = Arguments::new()
            .with_value(json!({"name": "sds"}))
            .with_value(json!(0));
        let err = handler.call(args).unwrap_err();

        assert_eq!(err.len(), 2);
        assert!(err.validation_errors()[0].has_constraint(IS_EMAIL));
        assert!(err.validation_errors()[1].has_constraint("min"));
    }

    #[test]
    fn test_last_registration_wins() {
        let registry = Arc::new(ParameterRegistry::new());
        let strict = Schema::shared("Strict", json!({"type": "string", "minLength": 10})).unwrap();
        let loose = Schema::shared("Loose", json!({"type": "string"})).unwrap();
        let handler = registry
            .method("replace")
            .parameter(0, ParameterOptions::schema(strict))
            .parameter(0, ParameterOptions::schema(loose))
            .wrap(|_args: Arguments| "ok");

        let args = Arguments::new().with_value(json!("short"));
        assert_eq!(handler.call(args).unwrap(), "ok");
    }

    #[test]
    fn test_wrappers_are_independent() {
        let registry = Arc::new(ParameterRegistry::new());
        let guarded = registry
            .method("guarded")
            .parameter(0, ParameterOptions::of::<BodyDto>().unwrap())
            .wrap(|_args: Arguments| ());
        let open = registry.method("open").wrap(|_args: Arguments| ());

        let args = body("sds");
        assert!(!guarded.check(&args).is_empty());
        assert!(open.check(&args).is_empty());
        assert_ne!(guarded.id(), open.id());
    }

    #[test]
    fn test_error_serializes_with_camel_case_keys() {
        let registry = Arc::new(ParameterRegistry::new());
        let handler = registry
            .method("test")
            .parameter(0, ParameterOptions::of::<BodyDto>().unwrap())
            .wrap(|_args: Arguments| ());

        let err = handler.call(body("sds")).unwrap_err();
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            json!({
                "message": "Validation Error",
                "validationErrors": [{
                    "target": {"name": "sds"},
                    "property": "name",
                    "constraints": {"isEmail": "name must be an email"}
                }]
            })
        );
    }
}
