//! Tests for command registration and signature resolution

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use hype::{App, AppConfig, ArgType, DuplicatePolicy, Function, HypeError, Parameter};
    use serde_json::json;

    fn noop(name: &str) -> Function {
        Function::new(name, |_| Ok(()))
    }

    #[test]
    fn unnamed_registration_uses_function_name() {
        let mut app = App::new();
        for name in ["alpha", "beta_gamma", "d3lta"] {
            app.command(&noop(name).untyped("x")).register().unwrap();
            assert_eq!(app.registry().get(name).unwrap().name(), name);
        }
        assert_eq!(app.commands(), vec!["alpha", "beta_gamma", "d3lta"]);
    }

    #[test]
    fn explicit_annotations_are_never_overridden() {
        let mut app = App::new();
        let function = noop("mixed")
            .param("a", ArgType::String)
            .param("b", ArgType::Integer)
            .param("c", ArgType::Boolean);

        app.command(&function)
            .arg_type(ArgType::Float)
            .register()
            .unwrap();

        let descriptor = app.registry().get("mixed").unwrap();
        assert_eq!(
            descriptor.params(),
            &[
                Parameter::new("a", Some(ArgType::String)),
                Parameter::new("b", Some(ArgType::Integer)),
                Parameter::new("c", Some(ArgType::Boolean)),
            ]
        );
        assert_eq!(descriptor.arg_type(), Some(ArgType::Float));
    }

    #[test]
    fn unannotated_parameter_inherits_first_annotation() {
        let mut app = App::new();
        let function = noop("pair").param("a", ArgType::Integer).untyped("b");

        app.command(&function).register().unwrap();

        let descriptor = app.registry().get("pair").unwrap();
        assert_eq!(descriptor.arg_type(), Some(ArgType::Integer));
        assert_eq!(descriptor.params()[1], Parameter::new("b", Some(ArgType::Integer)));
    }

    #[test]
    fn untyped_parameters_without_any_type_stay_untyped() {
        let mut app = App::new();
        app.command(&noop("loose").untyped("a").untyped("b"))
            .register()
            .unwrap();

        let descriptor = app.registry().get("loose").unwrap();
        assert_eq!(descriptor.arg_type(), None);
        assert!(descriptor.params().iter().all(|param| param.ty.is_none()));
    }

    #[test]
    fn zero_parameters_register() {
        let mut app = App::new();
        app.command(&Function::nullary("ping", || Ok(())))
            .register()
            .unwrap();

        let descriptor = app.registry().get("ping").unwrap();
        assert!(descriptor.params().is_empty());
        assert_eq!(descriptor.arg_type(), None);
    }

    #[test]
    fn duplicate_name_last_write_wins() {
        let mut app = App::new();
        let first = noop("first").untyped("x");
        let second = noop("second").untyped("y");

        app.command(&first).name("shared").register().unwrap();
        app.command(&second).name("shared").register().unwrap();

        let descriptor = app.registry().get("shared").unwrap();
        assert!(descriptor.func().same_callable(&second));
        assert_eq!(descriptor.params()[0].name, "y");
        assert_eq!(app.registry().len(), 1);
    }

    #[test]
    fn duplicate_name_rejected_when_configured() {
        let mut app = App::with_config(AppConfig {
            on_duplicate: DuplicatePolicy::Reject,
            ..AppConfig::default()
        });

        app.command(&noop("once")).register().unwrap();
        let err = app.command(&noop("once")).register().unwrap_err();

        assert!(matches!(err, HypeError::Option { .. }));
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn zero_parameter_command_with_default_is_rejected() {
        let mut app = App::new();

        let err = app
            .command(&Function::nullary("ping", || Ok(())))
            .value(1)
            .register()
            .unwrap_err();

        assert!(matches!(err, HypeError::TooManyArguments { .. }));
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("ping takes no arguments"));
        assert!(app.registry().is_empty());

        app.command(&Function::nullary("ping", || Ok(())))
            .register()
            .unwrap();
        assert!(app.registry().contains("ping"));
    }

    #[test]
    fn greet_scenario_descriptor() {
        let mut app = App::new();
        let greet = Function::unary("greet", "name", |_name: String| Ok(()));

        app.command(&greet).name("greet").register().unwrap();

        let descriptor = app.registry().get("greet").unwrap();
        assert_eq!(
            descriptor.to_json(),
            json!({
                "name": "greet",
                "params": [{ "name": "name", "type": "str" }],
                "description": null,
                "default": null,
                "type": "str",
                "required": false,
                "deprecated": false
            })
        );
    }

    #[test]
    fn add_scenario_both_params_take_declared_type() {
        let mut app = App::new();
        let add = noop("add").untyped("a").untyped("b");

        app.command(&add).arg_type(ArgType::Integer).register().unwrap();

        let descriptor = app.registry().get("add").unwrap();
        assert_eq!(
            descriptor.params(),
            &[
                Parameter::new("a", Some(ArgType::Integer)),
                Parameter::new("b", Some(ArgType::Integer)),
            ]
        );
    }

    #[test]
    fn anonymous_without_name_is_missing_name() {
        let mut app = App::new();
        let anonymous = Function::anonymous(|_| Ok(()));

        let err = app.command(&anonymous).register().unwrap_err();
        assert!(matches!(err, HypeError::MissingName { .. }));
        assert_eq!(err.exit_code(), 5);
        assert!(app.registry().is_empty());

        let err = app.command(&anonymous).name("  ").register().unwrap_err();
        assert!(matches!(err, HypeError::MissingName { .. }));
    }

    #[test]
    fn anonymous_with_explicit_name_registers() {
        let mut app = App::new();
        app.command(&Function::anonymous(|_| Ok(())))
            .name("lambda")
            .register()
            .unwrap();
        assert_eq!(app.commands(), vec!["lambda"]);
    }

    #[test]
    fn empty_name_falls_back_to_function_name() {
        let mut app = App::new();
        app.command(&noop("fallback")).name("").register().unwrap();
        assert!(app.registry().contains("fallback"));
    }

    #[test]
    fn register_returns_the_same_callable() {
        let mut app = App::new();
        let function = Function::unary("double", "n", |n: i64| {
            assert_eq!(n * 2, 8);
            Ok(())
        });

        let returned = app.command(&function).register().unwrap();

        assert!(returned.same_callable(&function));
        returned.call(vec![json!(4)]).unwrap();
    }

    #[test]
    fn options_are_stored_on_descriptor() {
        let mut app = App::new();
        app.command(&noop("port").untyped("p"))
            .description("Port to listen on")
            .value(8080)
            .arg_type(ArgType::Integer)
            .required(true)
            .deprecated(true)
            .register()
            .unwrap();

        let descriptor = app.registry().get("port").unwrap();
        assert_eq!(descriptor.description(), Some("Port to listen on"));
        assert_eq!(descriptor.default(), Some(&json!(8080)));
        assert!(descriptor.required());
        assert!(descriptor.deprecated());
    }
}
