use chrono::{DateTime, Utc};
use mileston::client::SIGNATURE_HEADER;
use mileston::types::{
    BatchPaymentPayload, CreateInvoicePayload, CreateSubWalletPayload, SendFundsPayload,
    SendPayoutRequest, UpdatePaymentLinkPayload, WalletType,
};
use mileston::{Invoice, PaymentLink, Payout, RecurringPayment, Wallet};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn due_date() -> DateTime<Utc> {
    "2025-01-31T00:00:00Z".parse().unwrap()
}

fn captured_body(request: &wiremock::Request) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}

#[tokio::test]
async fn invoice_create_injects_add_pdf_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create"))
        .and(query_param("businessName", "Acme Co"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "statusCode": 201,
            "message": "created",
            "invoiceLink": "https://checkout.mileston.co/invoice/inv_1",
            "invoiceData": {
                "invoiceId": "inv_1",
                "amount": "10",
                "itemName": "Widget",
                "customerEmail": "a@b.com",
                "dueDate": "2025-01-31T00:00:00Z",
                "addPdf": true
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let invoice = Invoice::with_base_url("test-key", "biz-1", server.uri()).unwrap();
    let response = invoice
        .create(
            "Acme Co",
            CreateInvoicePayload {
                amount: "10".to_owned(),
                item_name: "Widget".to_owned(),
                customer_email: "a@b.com".to_owned(),
                due_date: due_date(),
                add_pdf: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(response.invoice_link, "https://checkout.mileston.co/invoice/inv_1");

    let requests = server.received_requests().await.unwrap();
    let body = captured_body(&requests[0]);
    assert_eq!(body["addPdf"], true);
    assert_eq!(body["itemName"], "Widget");
    assert_eq!(body["customerEmail"], "a@b.com");
}

#[tokio::test]
async fn invoice_create_keeps_explicit_add_pdf() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "statusCode": 201,
            "message": "created",
            "invoiceLink": "https://checkout.mileston.co/invoice/inv_2",
            "invoiceData": { "invoiceId": "inv_2" }
        })))
        .mount(&server)
        .await;

    let invoice = Invoice::with_base_url("test-key", "biz-1", server.uri()).unwrap();
    invoice
        .create(
            "Acme Co",
            CreateInvoicePayload {
                amount: "10".to_owned(),
                item_name: "Widget".to_owned(),
                customer_email: "a@b.com".to_owned(),
                due_date: due_date(),
                add_pdf: Some(false),
            },
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(captured_body(&requests[0])["addPdf"], false);
}

#[tokio::test]
async fn invoice_get_all_and_delete_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "message": "ok",
            "invoiceData": [{ "invoiceId": "inv_1" }, { "invoiceId": "inv_2" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/delete/inv_9"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "statusCode": 200, "message": "deleted" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let invoice = Invoice::with_base_url("test-key", "biz-1", server.uri()).unwrap();
    let all = invoice.get_all(3).await.unwrap();
    assert_eq!(all.invoice_data.len(), 2);

    let deleted = invoice.delete("inv_9").await.unwrap();
    assert_eq!(deleted.message, "deleted");
}

#[tokio::test]
async fn payment_link_update_sends_exactly_the_given_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/update"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "message": "updated",
            "paymentLink": "https://checkout.mileston.co/pl_1",
            "paymentData": { "paymentLinkId": "pl_1", "title": "New Title" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payment_link = PaymentLink::with_base_url("test-key", "biz-1", server.uri()).unwrap();
    let response = payment_link
        .update(UpdatePaymentLinkPayload {
            payment_link_id: "pl_1".to_owned(),
            amount: None,
            title: Some("New Title".to_owned()),
            description: None,
            redirect_url: None,
            logo_url: None,
            banner_url: None,
        })
        .await
        .unwrap();
    assert_eq!(response.payment_data.payment_link_id, "pl_1");

    let requests = server.received_requests().await.unwrap();
    let body = captured_body(&requests[0]);
    let fields = body.as_object().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields["paymentLinkId"], "pl_1");
    assert_eq!(fields["title"], "New Title");
    assert!(!requests[0].headers.contains_key(SIGNATURE_HEADER));
}

#[tokio::test]
async fn recurring_payment_get_all_uses_limit_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "message": "ok",
            "recurringPaymentData": [{ "recurringPaymentId": "rp_1" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let recurring = RecurringPayment::with_base_url("test-key", "biz-1", server.uri()).unwrap();
    let response = recurring.get_all(5).await.unwrap();
    assert_eq!(response.recurring_payment_data.len(), 1);
    assert_eq!(response.recurring_payment_data[0].recurring_payment_id, "rp_1");
}

#[tokio::test]
async fn payout_send_payment_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/send-payment"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "statusCode": 200, "message": "ok" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let payout = Payout::with_base_url("test-key", "biz-1", server.uri()).unwrap();
    payout
        .send_payment(SendPayoutRequest {
            secret_phrase: None,
            amount: "100".to_owned(),
            recipient_address: "0xdef".to_owned(),
            wallet_type: WalletType::Eth,
        })
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = captured_body(&requests[0]);
    assert_eq!(body["walletType"], "eth");
    assert!(body.get("secretPhrase").is_none());
}

#[tokio::test]
async fn wallet_endpoints_map_to_sub_wallet_paths() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sub-wallet/create"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "type": "eth",
            "address": "0x1",
            "balance": "0"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sub-wallet/uuid-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "all",
            "address": { "eth": "0x1" },
            "balance": "12",
            "balances": { "eth": "12" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sub-wallet/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "message": "ok",
            "data": {
                "type": "all",
                "address": { "uuid-9": { "eth": "0x1" } },
                "balance": "12",
                "balances": { "uuid-9": { "eth": "12" } }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/sub-wallet/uuid-9"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "statusCode": 200, "message": "deleted" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let wallet = Wallet::with_base_url("test-key", "biz-1", "wallet-secret", server.uri()).unwrap();

    let created = wallet
        .create_new_sub_wallet(CreateSubWalletPayload {
            sub_wallet_uuid: "uuid-9".to_owned(),
            wallet_type: WalletType::Eth,
        })
        .await
        .unwrap();
    assert_eq!(created.address, "0x1");

    let one = wallet.get_sub_wallet("uuid-9").await.unwrap();
    assert_eq!(one.balance, "12");
    assert_eq!(one.address.eth.as_deref(), Some("0x1"));

    let all = wallet.get_all_sub_wallets().await.unwrap();
    assert_eq!(all.data.balance, "12");
    assert!(all.data.address.contains_key("uuid-9"));

    let deleted = wallet.delete_sub_wallet("uuid-9").await.unwrap();
    assert_eq!(deleted.message, "deleted");
    assert!(deleted.data.is_none());
}

#[tokio::test]
async fn wallet_batch_payment_and_transaction_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/batch-payment"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "statusCode": 200, "message": "queued" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/transaction-status/tx-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "message": "confirmed",
            "data": { "status": "success" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let wallet = Wallet::with_base_url("test-key", "biz-1", "wallet-secret", server.uri()).unwrap();

    let queued = wallet
        .batch_payment(BatchPaymentPayload {
            payments: vec![SendFundsPayload {
                amount: "1".to_owned(),
                recipient_address: "0xabc".to_owned(),
                wallet_type: WalletType::Sui,
            }],
        })
        .await
        .unwrap();
    assert_eq!(queued.message, "queued");

    let status = wallet.get_transaction_status("tx-1").await.unwrap();
    assert_eq!(status.data.unwrap()["status"], "success");

    let requests = server.received_requests().await.unwrap();
    let batch_body = captured_body(&requests[0]);
    assert_eq!(batch_body["payments"][0]["walletType"], "sui");
}
