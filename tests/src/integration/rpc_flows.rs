//! # RPC Correlation Flows
//!
//! Exercises the full request/response path: a client builds a request,
//! the gate admits it, an RPC stub answers it (or a dispatcher fails it),
//! and the dispatcher's correlation table observes exactly one terminal
//! outcome per request.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use conduit_transport::{
        build_failed_response_message, build_response_message, check_valid, AttributesBuilder,
        CallState,
    };
    use conduit_types::{Envelope, MessageId, MessageKind, Priority, StatusCode};

    use crate::fixtures::{client_response_address, method_address, payload, TTL};

    fn build_request() -> Envelope {
        let attributes = AttributesBuilder::request(
            client_response_address(),
            method_address(),
            Priority::High,
            TTL,
        )
        .build();
        Envelope::new(attributes, Some(payload()))
    }

    #[test]
    fn test_request_response_round_trip() {
        let request = check_valid(build_request()).unwrap();

        // The serving stub answers after invoking the handler.
        let response =
            check_valid(build_response_message(&request, vec![0xCA, 0xFE])).unwrap();

        assert_eq!(response.attributes.kind, MessageKind::Response);
        assert_eq!(response.attributes.sink, Some(client_response_address()));
        assert_eq!(response.attributes.source, method_address());
        assert_eq!(
            response.attributes.correlation_id,
            Some(request.attributes.id)
        );
        assert_eq!(response.attributes.priority, request.attributes.priority);
        assert_eq!(response.payload, Some(vec![0xCA, 0xFE]));
    }

    #[test]
    fn test_failed_response_variant() {
        let request = check_valid(build_request()).unwrap();

        let failed =
            check_valid(build_failed_response_message(&request, StatusCode::Unavailable))
                .unwrap();

        assert_eq!(failed.attributes.sink, Some(client_response_address()));
        assert_eq!(
            failed.attributes.correlation_id,
            Some(request.attributes.id)
        );
        assert_eq!(failed.attributes.comm_status, Some(StatusCode::Unavailable));
        assert!(failed.payload.is_none());
    }

    /// A minimal dispatcher-side correlation table, driven the way a real
    /// dispatcher drives it: complete on a matching response, expire on
    /// ttl, drop anything after a terminal state.
    struct CorrelationTable {
        calls: HashMap<MessageId, CallState>,
    }

    impl CorrelationTable {
        fn new() -> Self {
            Self {
                calls: HashMap::new(),
            }
        }

        fn track(&mut self, request: &Envelope) {
            self.calls
                .insert(request.attributes.id, CallState::Pending);
        }

        /// Returns true iff the response may be delivered.
        fn on_response(&mut self, response: &Envelope) -> bool {
            let Some(correlation_id) = response.attributes.correlation_id else {
                return false;
            };
            match self.calls.get_mut(&correlation_id) {
                Some(state) if !state.is_terminal() => {
                    *state = CallState::Completed;
                    true
                }
                _ => false,
            }
        }

        /// Expire a pending call, synthesizing the terminal failure.
        fn on_deadline(&mut self, request: &Envelope) -> Option<Envelope> {
            match self.calls.get_mut(&request.attributes.id) {
                Some(state) if !state.is_terminal() => {
                    *state = CallState::Expired;
                    Some(build_failed_response_message(
                        request,
                        StatusCode::DeadlineExceeded,
                    ))
                }
                _ => None,
            }
        }
    }

    #[test]
    fn test_exactly_one_terminal_outcome_on_completion() {
        let mut table = CorrelationTable::new();
        let request = check_valid(build_request()).unwrap();
        table.track(&request);

        let response = build_response_message(&request, payload());
        assert!(table.on_response(&response));

        // A duplicate response is discarded, and expiry after completion
        // synthesizes nothing.
        assert!(!table.on_response(&response));
        assert!(table.on_deadline(&request).is_none());
    }

    #[test]
    fn test_exactly_one_terminal_outcome_on_expiry() {
        let mut table = CorrelationTable::new();
        let request = check_valid(build_request()).unwrap();
        table.track(&request);

        let failure = table.on_deadline(&request).unwrap();
        assert_eq!(
            failure.attributes.comm_status,
            Some(StatusCode::DeadlineExceeded)
        );
        assert_eq!(
            failure.attributes.correlation_id,
            Some(request.attributes.id)
        );

        // The late real response is discarded.
        let late = build_response_message(&request, payload());
        assert!(!table.on_response(&late));
    }

    #[test]
    fn test_uncorrelated_response_is_never_delivered() {
        let mut table = CorrelationTable::new();
        let request = check_valid(build_request()).unwrap();
        table.track(&request);

        let other_request = build_request();
        let stray = build_response_message(&other_request, payload());
        assert!(!table.on_response(&stray));
    }

    #[test]
    fn test_expiry_clock_runs_from_request_id() {
        let request = build_request();
        let created = request.attributes.id.unix_ts_millis();

        assert!(!request.attributes.is_expired(created + u64::from(TTL)));
        assert!(request.attributes.is_expired(created + u64::from(TTL) + 1));
    }
}
