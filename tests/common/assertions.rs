//! Custom assertion macros

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a result is an error, optionally of a given pattern
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        assert!($result.is_err(), "Expected Err, got Ok");
    };
    ($result:expr, $pattern:pat) => {
        match $result {
            Err($pattern) => {}
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => panic!("Expected different error variant, got: {:?}", e),
        }
    };
}

/// Assert that a JSON envelope reports failure with `status`
#[macro_export]
macro_rules! assert_error_envelope {
    ($body:expr, $status:expr) => {
        assert_eq!($body["success"], serde_json::json!(false), "body: {}", $body);
        assert_eq!($body["status_code"], serde_json::json!($status), "body: {}", $body);
        assert!($body.get("data").is_none(), "error envelope carries data: {}", $body);
    };
}
