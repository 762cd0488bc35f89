//! Unit tests for email service implementations

mod notifier_adapter_tests;
