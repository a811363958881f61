//! Integration tests for the operation registry, driven by a mock client.
//!
//! These cover every exposed operation: validation failures stay local
//! (the mock counts calls), successful requests coerce into typed calls,
//! and client errors pass through unchanged.

mod common;

use serde_json::{json, Value};

use common::MockApi;
use tradovate_bridge::models::{ContractId, OrderId};
use tradovate_bridge::registry::Params;
use tradovate_bridge::{Error, Registry};

fn params(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

mod authenticate_tests {
    use super::*;

    #[tokio::test]
    async fn test_authenticate_success() {
        let registry = Registry::new(MockApi::default());

        let result = registry.dispatch("authenticate", &Params::new()).await.unwrap();
        assert_eq!(result["accessToken"], "test-token");
        assert_eq!(result["mdAccessToken"], "test-md-token");
        assert_eq!(result["userId"], 12345);
        assert_eq!(result["name"], "Test User");
    }

    #[tokio::test]
    async fn test_authenticate_failure() {
        let mock = MockApi {
            authenticate_fn: Some(Box::new(|| {
                Err(Error::Authentication("invalid credentials".to_string()))
            })),
            ..Default::default()
        };
        let registry = Registry::new(mock);

        let err = registry.dispatch("authenticate", &Params::new()).await.unwrap_err();
        assert!(err.is_auth_error());
    }
}

mod query_tests {
    use super::*;
    use tradovate_bridge::models::{Account, AccountId, Contract, Position};

    #[tokio::test]
    async fn test_get_accounts() {
        let mock = MockApi {
            get_accounts_fn: Some(Box::new(|| {
                Ok(vec![Account {
                    id: AccountId::new(1),
                    name: "Test Account".to_string(),
                    account_type: "Live".to_string(),
                    active: true,
                    cash_balance: 25_000.0,
                    realized_pnl: 0.0,
                    unrealized_pnl: 0.0,
                }])
            })),
            ..Default::default()
        };
        let registry = Registry::new(mock);

        let result = registry.dispatch("getAccounts", &Params::new()).await.unwrap();
        assert_eq!(result[0]["id"], 1);
        assert_eq!(result[0]["name"], "Test Account");
    }

    #[tokio::test]
    async fn test_get_positions() {
        let mock = MockApi {
            get_positions_fn: Some(Box::new(|| {
                Ok(vec![Position {
                    id: 1,
                    account_id: AccountId::new(123),
                    contract_id: ContractId::new(456),
                    net_pos: 2,
                    avg_price: 100.0,
                    realized_pl: 0.0,
                    unrealized_pl: 5.5,
                }])
            })),
            ..Default::default()
        };
        let registry = Registry::new(mock);

        let result = registry.dispatch("getPositions", &Params::new()).await.unwrap();
        assert_eq!(result[0]["accountId"], 123);
        assert_eq!(result[0]["netPos"], 2);
    }

    #[tokio::test]
    async fn test_get_contracts() {
        let mock = MockApi {
            get_contracts_fn: Some(Box::new(|| {
                Ok(vec![Contract {
                    id: ContractId::new(1),
                    name: "ESZ4".to_string(),
                    contract_type: "Future".to_string(),
                    exchange: "CME".to_string(),
                    symbol: "ES".to_string(),
                }])
            })),
            ..Default::default()
        };
        let registry = Registry::new(mock);

        let result = registry.dispatch("getContracts", &Params::new()).await.unwrap();
        assert_eq!(result[0]["symbol"], "ES");
    }

    #[tokio::test]
    async fn test_get_market_data_passes_contract_id() {
        let registry = Registry::new(MockApi::default());

        let p = params(json!({ "contractId": 54321 }));
        let result = registry.dispatch("getMarketData", &p).await.unwrap();
        assert_eq!(result["contractId"], 54321);
        assert_eq!(result["bid"], 100.0);
    }

    #[tokio::test]
    async fn test_get_market_data_missing_contract_id() {
        let registry = Registry::new(MockApi::default());

        let err = registry.dispatch("getMarketData", &Params::new()).await.unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "contractId" }));
        assert_eq!(registry.client().call_count(), 0);
    }
}

mod place_order_tests {
    use super::*;

    fn valid_params() -> Params {
        params(json!({
            "accountId": 12345,
            "contractId": 54321,
            "orderType": "Limit",
            "price": 100.50,
            "quantity": 10,
            "timeInForce": "Day"
        }))
    }

    #[tokio::test]
    async fn test_place_order_assigns_id() {
        let mock = MockApi {
            place_order_fn: Some(Box::new(|mut order| {
                order.id = Some(OrderId::new(67890));
                Ok(order)
            })),
            ..Default::default()
        };
        let registry = Registry::new(mock);

        let result = registry.dispatch("placeOrder", &valid_params()).await.unwrap();
        assert_eq!(result["id"], 67890);
        assert_eq!(result["accountId"], 12345);
        assert_eq!(result["orderType"], "Limit");
        assert_eq!(result["price"], 100.50);
    }

    #[tokio::test]
    async fn test_missing_fields_stay_local() {
        let registry = Registry::new(MockApi::default());

        let p = params(json!({ "accountId": 12345 }));
        let err = registry.dispatch("placeOrder", &p).await.unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "contractId" }));
        assert_eq!(registry.client().call_count(), 0);
    }

    #[tokio::test]
    async fn test_type_mismatch_stays_local() {
        let registry = Registry::new(MockApi::default());

        let mut p = valid_params();
        p.insert("accountId".to_string(), json!("12345"));
        let err = registry.dispatch("placeOrder", &p).await.unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { field: "accountId" }));
        assert_eq!(registry.client().call_count(), 0);
    }

    #[tokio::test]
    async fn test_limit_order_requires_price() {
        let registry = Registry::new(MockApi::default());

        let mut p = valid_params();
        p.remove("price");
        let err = registry.dispatch("placeOrder", &p).await.unwrap_err();
        assert!(matches!(
            err,
            Error::MissingConditionalField { field: "price" }
        ));
        assert_eq!(registry.client().call_count(), 0);
    }

    #[tokio::test]
    async fn test_market_order_needs_no_price() {
        let registry = Registry::new(MockApi::default());

        let mut p = valid_params();
        p.remove("price");
        p.insert("orderType".to_string(), json!("Market"));
        let result = registry.dispatch("placeOrder", &p).await.unwrap();
        assert_eq!(result["orderType"], "Market");
        assert!(result.get("price").is_none());
        assert_eq!(registry.client().call_count(), 1);
    }
}

mod cancel_and_fills_tests {
    use super::*;

    #[tokio::test]
    async fn test_cancel_order_success() {
        let mock = MockApi {
            cancel_order_fn: Some(Box::new(|order_id| {
                assert_eq!(order_id, OrderId::new(67890));
                Ok(())
            })),
            ..Default::default()
        };
        let registry = Registry::new(mock);

        let p = params(json!({ "orderId": 67890 }));
        let result = registry.dispatch("cancelOrder", &p).await.unwrap();
        assert_eq!(result, json!({ "success": true }));
    }

    #[tokio::test]
    async fn test_cancel_order_error_passes_through() {
        let mock = MockApi {
            cancel_order_fn: Some(Box::new(|_| {
                Err(Error::Api {
                    status: 404,
                    message: Some("order not found".to_string()),
                })
            })),
            ..Default::default()
        };
        let registry = Registry::new(mock);

        let p = params(json!({ "orderId": 1 }));
        let err = registry.dispatch("cancelOrder", &p).await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_get_fills() {
        let registry = Registry::new(MockApi::default());

        let p = params(json!({ "orderId": 67890 }));
        let result = registry.dispatch("getFills", &p).await.unwrap();
        assert_eq!(result[0]["orderId"], 67890);
        assert_eq!(result[0]["quantity"], 5);
    }
}

mod historical_data_tests {
    use super::*;

    fn valid_params() -> Params {
        params(json!({
            "contractId": 1,
            "startTime": "2024-01-01T00:00:00Z",
            "endTime": "2024-01-02T00:00:00Z",
            "interval": "1h"
        }))
    }

    #[tokio::test]
    async fn test_valid_range_delegates() {
        let registry = Registry::new(MockApi::default());

        let result = registry
            .dispatch("getHistoricalData", &valid_params())
            .await
            .unwrap();
        assert_eq!(result[0]["contractId"], 1);
        assert_eq!(result[0]["open"], 100.0);
        assert_eq!(registry.client().call_count(), 1);
    }

    #[tokio::test]
    async fn test_unparsable_start_time() {
        let registry = Registry::new(MockApi::default());

        let mut p = valid_params();
        p.insert("startTime".to_string(), json!("not-a-time"));
        let err = registry.dispatch("getHistoricalData", &p).await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTimestamp { field: "startTime", .. }
        ));
        assert_eq!(registry.client().call_count(), 0);
    }

    #[tokio::test]
    async fn test_unparsable_end_time() {
        let registry = Registry::new(MockApi::default());

        let mut p = valid_params();
        p.insert("endTime".to_string(), json!("2024-13-99T00:00:00Z"));
        let err = registry.dispatch("getHistoricalData", &p).await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTimestamp { field: "endTime", .. }
        ));
    }

    #[tokio::test]
    async fn test_inverted_range_stays_local() {
        let registry = Registry::new(MockApi::default());

        let mut p = valid_params();
        p.insert("startTime".to_string(), json!("2024-01-03T00:00:00Z"));
        let err = registry.dispatch("getHistoricalData", &p).await.unwrap_err();
        assert!(matches!(err, Error::InvalidTimeRange));
        assert_eq!(registry.client().call_count(), 0);
    }
}

mod risk_limit_tests {
    use super::*;

    fn valid_params() -> Params {
        params(json!({
            "accountId": 12345,
            "dayMaxLoss": 1000.0,
            "maxDrawdown": 500.0,
            "maxPositionQty": 10,
            "trailingStop": 50.0
        }))
    }

    #[tokio::test]
    async fn test_set_risk_limits_success() {
        let mock = MockApi {
            set_risk_limits_fn: Some(Box::new(|limits| {
                assert_eq!(limits.day_max_loss, 1000.0);
                assert_eq!(limits.max_position_qty, 10);
                Ok(())
            })),
            ..Default::default()
        };
        let registry = Registry::new(mock);

        let result = registry.dispatch("setRiskLimits", &valid_params()).await.unwrap();
        assert_eq!(result, json!({ "success": true }));
    }

    #[tokio::test]
    async fn test_negative_limit_stays_local() {
        let registry = Registry::new(MockApi::default());

        let mut p = valid_params();
        p.insert("dayMaxLoss".to_string(), json!(-1000.0));
        let err = registry.dispatch("setRiskLimits", &p).await.unwrap_err();
        assert!(matches!(err, Error::InvalidLimit { field: "dayMaxLoss" }));
        assert_eq!(registry.client().call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_account_id() {
        let registry = Registry::new(MockApi::default());

        let mut p = valid_params();
        p.remove("accountId");
        let err = registry.dispatch("setRiskLimits", &p).await.unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "accountId" }));
    }

    #[tokio::test]
    async fn test_get_risk_limits() {
        let registry = Registry::new(MockApi::default());

        let p = params(json!({ "accountId": 12345 }));
        let result = registry.dispatch("getRiskLimits", &p).await.unwrap();
        assert_eq!(result["accountId"], 12345);
        assert_eq!(result["dayMaxLoss"], 1000.0);
    }
}

mod error_passthrough_tests {
    use super::*;

    #[tokio::test]
    async fn test_server_error_passes_through_unchanged() {
        let mock = MockApi {
            get_accounts_fn: Some(Box::new(|| {
                Err(Error::Api {
                    status: 500,
                    message: Some("Internal server error".to_string()),
                })
            })),
            ..Default::default()
        };
        let registry = Registry::new(mock);

        let err = registry.dispatch("getAccounts", &Params::new()).await.unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message.as_deref(), Some("Internal server error"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_operation() {
        let registry = Registry::new(MockApi::default());

        let err = registry.dispatch("warpDrive", &Params::new()).await.unwrap_err();
        assert!(matches!(err, Error::UnknownOperation(name) if name == "warpDrive"));
        assert_eq!(registry.client().call_count(), 0);
    }
}
