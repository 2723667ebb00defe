#![cfg(test)]
use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use hourbridge_api::prelude::*;
use hourbridge_api::xdr::{AccountId, MuxedAccount, OperationBody, PublicKey as XdrPublicKey};
use hourbridge_api::PublicKey;
use hourbridge_client::{HorizonError, Network, ResultCodes, SubmitResponse};

/// In-memory ledger: tracks account sequence numbers, applies account
/// creation and records every accepted envelope.
pub struct MockNetwork {
    passphrase: NetworkPassphrase,
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    sequences: HashMap<PublicKey, i64>,
    submitted: Vec<Envelope>,
    funded: Vec<PublicKey>,
    reject_next: bool,
    ledger: u32,
}

impl MockNetwork {
    pub fn new() -> Self {
        Self {
            passphrase: NetworkPassphrase::Testnet,
            state: Mutex::new(State { ledger: 1, ..State::default() }),
        }
    }

    pub fn passphrase(&self) -> NetworkPassphrase {
        self.passphrase.clone()
    }

    /// The next submission fails as if the network rejected it.
    pub fn reject_next(&self) {
        self.state.lock().unwrap().reject_next = true;
    }

    pub fn submitted(&self) -> Vec<Envelope> {
        self.state.lock().unwrap().submitted.clone()
    }

    pub fn funded(&self) -> Vec<PublicKey> {
        self.state.lock().unwrap().funded.clone()
    }

    pub fn exists(&self, account: &PublicKey) -> bool {
        self.state.lock().unwrap().sequences.contains_key(account)
    }
}

fn from_muxed(account: &MuxedAccount) -> PublicKey {
    match account {
        MuxedAccount::Ed25519(key) => PublicKey(key.0),
        MuxedAccount::MuxedEd25519(muxed) => PublicKey(muxed.ed25519.0),
    }
}

fn from_account_id(account: &AccountId) -> PublicKey {
    let AccountId(XdrPublicKey::PublicKeyTypeEd25519(key)) = account;
    PublicKey(key.0)
}

fn rejected(code: &str) -> HorizonError {
    HorizonError::Rejected {
        title: "Transaction Failed".to_string(),
        result_codes: ResultCodes {
            transaction: Some(code.to_string()),
            inner_transaction: None,
            operations: Vec::new(),
        },
    }
}

#[async_trait]
impl Network for MockNetwork {
    async fn load_sequence(&self, account: &PublicKey) -> Result<i64> {
        let state = self.state.lock().unwrap();
        match state.sequences.get(account) {
            Some(sequence) => Ok(*sequence),
            None => Err(HorizonError::AccountNotFound(account.to_string()).into()),
        }
    }

    async fn submit(&self, envelope: &Envelope) -> Result<SubmitResponse> {
        let mut state = self.state.lock().unwrap();
        if state.reject_next {
            state.reject_next = false;
            return Err(rejected("tx_failed").into());
        }

        let tx = envelope.transaction();
        let source = from_muxed(&tx.source_account);
        match state.sequences.get(&source) {
            Some(current) if current + 1 == tx.seq_num.0 => {}
            Some(_) => return Err(rejected("tx_bad_seq").into()),
            None => return Err(rejected("tx_no_source_account").into()),
        }
        if let Envelope::FeeBump(bumped) = envelope {
            if !state.sequences.contains_key(&from_muxed(bumped.fee_source())) {
                return Err(rejected("tx_no_source_account").into());
            }
        }

        let ledger = state.ledger;
        state.sequences.insert(source, tx.seq_num.0);
        for op in tx.operations.iter() {
            if let OperationBody::CreateAccount(create) = &op.body {
                let created = from_account_id(&create.destination);
                state.sequences.insert(created, (ledger as i64) << 32);
            }
        }
        state.submitted.push(envelope.clone());
        state.ledger += 1;

        let hash = envelope.hash(&self.passphrase)?;
        Ok(SubmitResponse {
            hash: hash.iter().map(|b| format!("{:02x}", b)).collect(),
            ledger,
        })
    }

    async fn fund(&self, account: &PublicKey) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let ledger = state.ledger as i64;
        state.sequences.insert(*account, ledger << 32);
        state.funded.push(*account);
        state.ledger += 1;
        Ok(())
    }
}
