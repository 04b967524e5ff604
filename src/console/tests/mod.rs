//! Unit tests for the console state machine and controller flows.
