// Unit tests for Hello Service

use hello_service::core::{GetHelloMessageByNameUseCase, GetHelloMessageUseCase, HelloMessageService};
use hello_service::models::{HelloQuery, Message, Name};
use hello_service::services::{HelloMessageServiceImpl, DEFAULT_GREETING};
use std::sync::Arc;

fn service() -> Arc<dyn HelloMessageService> {
    Arc::new(HelloMessageServiceImpl::new())
}

#[test]
fn test_default_greeting_is_fixed() {
    assert_eq!(service().hello_message(), "Hello, World!");
    assert_eq!(DEFAULT_GREETING, "Hello, World!");
}

#[test]
fn test_named_greeting_format() {
    let service = service();
    let names = ["Ada", "", " ", "Grace Hopper", "Zoë", "\"quoted\"", "a\nb", "!"];

    for name in names {
        assert_eq!(service.hello_message_for(name), format!("Hello, {}!", name));
    }
}

#[test]
fn test_default_use_case() {
    let use_case = GetHelloMessageUseCase::new(service());
    assert_eq!(use_case.execute(), Message::new("Hello, World!"));
}

#[test]
fn test_by_name_use_case() {
    let use_case = GetHelloMessageByNameUseCase::new(service());
    assert_eq!(use_case.execute(&Name::from("Ada")).value(), "Hello, Ada!");
}

#[test]
fn test_empty_name_is_not_special_cased() {
    let use_case = GetHelloMessageByNameUseCase::new(service());
    assert_eq!(use_case.execute(&Name::default()).value(), "Hello, !");
}

#[test]
fn test_use_cases_are_deterministic() {
    let default_use_case = GetHelloMessageUseCase::new(service());
    let by_name = GetHelloMessageByNameUseCase::new(service());
    let name = Name::from("Ada");

    assert_eq!(default_use_case.execute(), default_use_case.execute());
    assert_eq!(by_name.execute(&name), by_name.execute(&name));
}

#[test]
fn test_query_name_selection() {
    let missing: HelloQuery = serde_json::from_str("{}").unwrap();
    assert!(missing.name().is_none());

    let present: HelloQuery = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
    assert_eq!(present.name(), Some(Name::from("Ada")));
}
