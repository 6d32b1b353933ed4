#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use variant_lookup::{AppState, config::Config};

/// 一个预设的上游响应
#[derive(Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl Canned {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

struct Shared {
    variant: Mutex<Canned>,
    vep: Mutex<Canned>,
    variant_calls: AtomicUsize,
    vep_calls: AtomicUsize,
}

/// 本地假 Ensembl，监听随机端口并统计调用次数
pub struct StubEnsembl {
    addr: SocketAddr,
    shared: Arc<Shared>,
}

impl StubEnsembl {
    pub async fn start() -> Self {
        let shared = Arc::new(Shared {
            variant: Mutex::new(Canned::json(200, sample_variation())),
            vep: Mutex::new(Canned::json(200, sample_vep())),
            variant_calls: AtomicUsize::new(0),
            vep_calls: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/variation/human/{rsid}", get(variation))
            .route("/vep/human/id/{rsid}", get(vep))
            .with_state(shared.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, shared }
    }

    pub fn variant_url(&self) -> String {
        format!("http://{}/variation/human/", self.addr)
    }

    pub fn vep_url(&self) -> String {
        format!("http://{}/vep/human/id/", self.addr)
    }

    pub fn set_variant(&self, canned: Canned) {
        *self.shared.variant.lock().unwrap() = canned;
    }

    pub fn set_vep(&self, canned: Canned) {
        *self.shared.vep.lock().unwrap() = canned;
    }

    pub fn variant_calls(&self) -> usize {
        self.shared.variant_calls.load(Ordering::SeqCst)
    }

    pub fn vep_calls(&self) -> usize {
        self.shared.vep_calls.load(Ordering::SeqCst)
    }

    pub fn config(&self, extra: &[(&str, &str)]) -> Config {
        let mut vars: HashMap<String, String> = HashMap::from([
            ("ENSEMBL_VARIANT_URL".to_string(), self.variant_url()),
            ("ENSEMBL_VEP_URL".to_string(), self.vep_url()),
        ]);
        for (k, v) in extra {
            vars.insert(k.to_string(), v.to_string());
        }
        Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
    }

    pub fn app_state(&self, extra: &[(&str, &str)]) -> AppState {
        AppState::new(self.config(extra)).unwrap()
    }
}

async fn variation(State(shared): State<Arc<Shared>>, Path(_rsid): Path<String>) -> Response {
    shared.variant_calls.fetch_add(1, Ordering::SeqCst);
    let canned = shared.variant.lock().unwrap().clone();
    reply(canned).await
}

async fn vep(State(shared): State<Arc<Shared>>, Path(_rsid): Path<String>) -> Response {
    shared.vep_calls.fetch_add(1, Ordering::SeqCst);
    let canned = shared.vep.lock().unwrap().clone();
    reply(canned).await
}

async fn reply(canned: Canned) -> Response {
    if !canned.delay.is_zero() {
        tokio::time::sleep(canned.delay).await;
    }
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}

/// 一个已关闭端口的地址，请求会被拒绝连接
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

pub fn sample_variation() -> Value {
    json!({
        "name": "rs123",
        "mappings": [{"seq_region_name": "1", "start": 1000, "allele_string": "A/G"}],
        "most_severe_consequence": "missense_variant",
        "MAF": 0.05
    })
}

pub fn sample_vep() -> Value {
    json!([
        {"transcript_consequences": [{"gene_symbol": "TEST-GENE"}, {"gene_symbol": "TEST-GENE"}]},
        {"transcript_consequences": [{"gene_symbol": "TEST-GENE"}]}
    ])
}
