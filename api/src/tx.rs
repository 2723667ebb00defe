use stellar_strkey::ed25519::PublicKey;
use stellar_xdr::curr::{
    DecoratedSignature, FeeBumpTransaction, FeeBumpTransactionEnvelope, FeeBumpTransactionExt,
    FeeBumpTransactionInnerTx, Limits, Memo, MuxedAccount, Operation, Preconditions,
    SequenceNumber, SignatureHint, TimeBounds, TimePoint, Transaction, TransactionEnvelope,
    TransactionExt, TransactionV1Envelope, VecM, WriteXdr,
};

use crate::consts::*;
use crate::error::{ApiError, ApiResult};
use crate::keys::{hint, muxed, Keypair};

/// Builds a V1 transaction for a source account whose current sequence
/// number is known. The built transaction uses the next sequence number.
pub struct TransactionBuilder {
    source: PublicKey,
    sequence: i64,
    operations: Vec<Operation>,
}

impl TransactionBuilder {
    pub fn new(source: &PublicKey, current_sequence: i64) -> Self {
        Self {
            source: *source,
            sequence: current_sequence,
            operations: Vec::new(),
        }
    }

    pub fn add_operation(mut self, op: Operation) -> Self {
        self.operations.push(op);
        self
    }

    pub fn build(self) -> ApiResult<Tx> {
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        self.build_at(now)
    }

    /// Builds with a validity window of `[0, now + TX_TIMEOUT_SECS]`.
    pub fn build_at(self, now: u64) -> ApiResult<Tx> {
        let count = self.operations.len();
        if count == 0 {
            return Err(ApiError::NoOperations);
        }
        if count > MAX_OPERATIONS {
            return Err(ApiError::TooManyOperations(count));
        }

        let fee = BASE_FEE
            .checked_mul(count as u32)
            .ok_or(ApiError::FeeOverflow)?;
        let sequence = self
            .sequence
            .checked_add(1)
            .ok_or(ApiError::AmountOverflow)?;

        let tx = Transaction {
            source_account: muxed(&self.source),
            fee,
            seq_num: SequenceNumber(sequence),
            cond: Preconditions::Time(TimeBounds {
                min_time: TimePoint(0),
                max_time: TimePoint(now.saturating_add(TX_TIMEOUT_SECS)),
            }),
            memo: Memo::None,
            operations: self.operations.try_into()?,
            ext: TransactionExt::V0,
        };

        Ok(Tx {
            envelope: TransactionV1Envelope { tx, signatures: VecM::default() },
        })
    }
}

/// A V1 transaction envelope and the signatures collected so far.
#[derive(Clone, Debug)]
pub struct Tx {
    envelope: TransactionV1Envelope,
}

impl Tx {
    pub fn transaction(&self) -> &Transaction {
        &self.envelope.tx
    }

    pub fn source(&self) -> &MuxedAccount {
        &self.envelope.tx.source_account
    }

    pub fn operations(&self) -> &[Operation] {
        &self.envelope.tx.operations
    }

    pub fn signatures(&self) -> &[DecoratedSignature] {
        &self.envelope.signatures
    }

    pub fn hash(&self, network: &NetworkPassphrase) -> ApiResult<[u8; 32]> {
        Ok(self.envelope.tx.hash(network.network_id())?)
    }

    /// Appends one signature per key, in order.
    pub fn sign(&mut self, signers: &[&Keypair], network: &NetworkPassphrase) -> ApiResult<()> {
        let hash = self.hash(network)?;
        let mut signatures = self.envelope.signatures.to_vec();
        for signer in signers {
            signatures.push(signer.sign_decorated(&hash)?);
        }
        self.envelope.signatures = signatures.try_into()?;
        Ok(())
    }

    pub fn signer_hints(&self) -> Vec<SignatureHint> {
        signer_hints(&self.envelope.signatures)
    }

    pub fn is_signed_by(&self, key: &PublicKey) -> bool {
        self.signer_hints().contains(&hint(key))
    }

    /// Wraps this transaction in a fee-bump paid and signed by `sponsor`.
    /// The fee covers the inner operations plus the wrapper itself.
    pub fn fee_bump(
        self,
        sponsor: &Keypair,
        base_fee: u32,
        network: &NetworkPassphrase,
    ) -> ApiResult<FeeBumpTx> {
        let ops = self.operations().len() as i64;
        let fee = (base_fee as i64)
            .checked_mul(ops + 1)
            .ok_or(ApiError::FeeOverflow)?;

        let tx = FeeBumpTransaction {
            fee_source: sponsor.muxed(),
            fee,
            inner_tx: FeeBumpTransactionInnerTx::Tx(self.envelope),
            ext: FeeBumpTransactionExt::V0,
        };
        let hash = tx.hash(network.network_id())?;
        let signatures = vec![sponsor.sign_decorated(&hash)?];

        Ok(FeeBumpTx {
            envelope: FeeBumpTransactionEnvelope { tx, signatures: signatures.try_into()? },
        })
    }
}

/// A fee-bump envelope around a signed V1 transaction.
#[derive(Clone, Debug)]
pub struct FeeBumpTx {
    envelope: FeeBumpTransactionEnvelope,
}

impl FeeBumpTx {
    pub fn fee_source(&self) -> &MuxedAccount {
        &self.envelope.tx.fee_source
    }

    pub fn fee(&self) -> i64 {
        self.envelope.tx.fee
    }

    pub fn inner(&self) -> &TransactionV1Envelope {
        match &self.envelope.tx.inner_tx {
            FeeBumpTransactionInnerTx::Tx(inner) => inner,
        }
    }

    pub fn hash(&self, network: &NetworkPassphrase) -> ApiResult<[u8; 32]> {
        Ok(self.envelope.tx.hash(network.network_id())?)
    }

    pub fn signer_hints(&self) -> Vec<SignatureHint> {
        signer_hints(&self.envelope.signatures)
    }

    pub fn inner_signer_hints(&self) -> Vec<SignatureHint> {
        signer_hints(&self.inner().signatures)
    }
}

/// Anything that can be submitted to the network.
#[derive(Clone, Debug)]
pub enum Envelope {
    Tx(Tx),
    FeeBump(FeeBumpTx),
}

impl Envelope {
    pub fn to_xdr(&self) -> TransactionEnvelope {
        match self {
            Envelope::Tx(tx) => TransactionEnvelope::Tx(tx.envelope.clone()),
            Envelope::FeeBump(tx) => TransactionEnvelope::TxFeeBump(tx.envelope.clone()),
        }
    }

    pub fn to_base64(&self) -> ApiResult<String> {
        Ok(self.to_xdr().to_xdr_base64(Limits::none())?)
    }

    pub fn hash(&self, network: &NetworkPassphrase) -> ApiResult<[u8; 32]> {
        match self {
            Envelope::Tx(tx) => tx.hash(network),
            Envelope::FeeBump(tx) => tx.hash(network),
        }
    }

    /// The V1 transaction carrying the operations, wrapped or not.
    pub fn transaction(&self) -> &Transaction {
        match self {
            Envelope::Tx(tx) => tx.transaction(),
            Envelope::FeeBump(tx) => &tx.inner().tx,
        }
    }

    pub fn is_fee_bump(&self) -> bool {
        matches!(self, Envelope::FeeBump(_))
    }
}

impl From<Tx> for Envelope {
    fn from(tx: Tx) -> Self {
        Envelope::Tx(tx)
    }
}

impl From<FeeBumpTx> for Envelope {
    fn from(tx: FeeBumpTx) -> Self {
        Envelope::FeeBump(tx)
    }
}

fn signer_hints(signatures: &[DecoratedSignature]) -> Vec<SignatureHint> {
    signatures.iter().map(|s| s.hint.clone()).collect()
}
