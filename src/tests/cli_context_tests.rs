use std::sync::Arc;

use crate::cli_context::CliContextBuilder;
use crate::config::Config;
use crate::error::IssueError;

fn builder() -> CliContextBuilder {
    CliContextBuilder::new().with_config(Config::default())
}

#[test]
fn test_defaults_from_empty_config() {
    let context = builder().build().unwrap();

    assert_eq!(context.project().to_string(), "golang/go");
    assert_eq!(context.api_root(), "https://api.github.com");
    assert_eq!(context.render_options().wrap_width, 70);
    assert!(!context.render_options().raw);
    assert!(!context.json());
}

#[test]
fn test_interactive_uses_wide_wrap() {
    let context = builder().interactive(true).build().unwrap();
    assert_eq!(context.render_options().wrap_width, 120);

    let context = builder().interactive(true).wrap_width(90).build().unwrap();
    assert_eq!(context.render_options().wrap_width, 90);
}

#[test]
fn test_config_values_are_used() {
    let config = Config {
        project: Some("rsc/github".to_string()),
        api_root: Some("http://localhost:8080/".to_string()),
        wrap_width: Some(60),
        ..Default::default()
    };
    let context = CliContextBuilder::new().with_config(config).build().unwrap();

    assert_eq!(context.project().owner, "rsc");
    assert_eq!(context.api_root(), "http://localhost:8080");
    assert_eq!(context.render_options().wrap_width, 60);
}

#[test]
fn test_overrides_beat_config() {
    let config = Config {
        project: Some("rsc/github".to_string()),
        ..Default::default()
    };
    let context = CliContextBuilder::new()
        .with_config(config)
        .with_project("golang/tools")
        .raw(true)
        .json(true)
        .build()
        .unwrap();

    assert_eq!(context.project().repo, "tools");
    assert!(context.render_options().raw);
    assert!(context.json());
}

#[test]
fn test_invalid_project_is_rejected() {
    let result = builder().with_project("golang").build();
    assert!(matches!(result, Err(IssueError::InvalidInput(_))));
}

#[test]
fn test_zero_wrap_width_is_rejected() {
    let result = builder().wrap_width(0).build();
    assert!(matches!(result, Err(IssueError::InvalidInput(_))));
}

#[test]
fn test_client_with_explicit_token() {
    let mut context = builder().with_token("ghp_test").build().unwrap();

    assert_eq!(context.token().unwrap(), "ghp_test");
    let first = context.client().unwrap();
    let second = context.client().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.project().to_string(), "golang/go");
}

#[test]
fn test_cache_is_shared() {
    let context = builder().build().unwrap();
    assert!(Arc::ptr_eq(&context.cache(), &context.cache()));
}
