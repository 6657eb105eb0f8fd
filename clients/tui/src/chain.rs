//! Read-only contract queries over the ABCI SmartContractState endpoint.
//!
//! Only the refresh completion handler in the UI loop ever writes the
//! fetched values into the snapshot store; everything here just fetches.

use mafia::wire::{ConfigResponse, LastEliminatedResponse, PhaseResponse, QueryMsg, RawPlayer};
use mafia::{Phase, Player};

pub type BoxErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Clone)]
pub struct QueryClient {
    rpc_url: String,
    contract: String,
}

impl QueryClient {
    pub fn new(rpc_url: impl Into<String>, contract: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            contract: contract.into(),
        }
    }

    pub fn contract(&self) -> &str {
        &self.contract
    }

    async fn smart_query(&self, query: &[u8]) -> Result<Vec<u8>, BoxErr> {
        use prost::Message;
        use tendermint_rpc::{Client as TmClient, HttpClient};

        let path = "/cosmwasm.wasm.v1.Query/SmartContractState";
        let data = {
            let req = xion_types::cosmwasm::wasm::v1::QuerySmartContractStateRequest {
                address: self.contract.clone(),
                query_data: query.to_vec(),
            };
            req.encode_to_vec()
        };

        let tm_client = HttpClient::new(self.rpc_url.as_str())?;
        let response = tm_client
            .abci_query(Some(path.to_string()), data, None, false)
            .await?;

        if response.code.is_err() {
            return Err(format!("ABCI query failed: {}", response.log).into());
        }

        let wrapper = xion_types::cosmwasm::wasm::v1::QuerySmartContractStateResponse::decode(
            response.value.as_slice(),
        )?;
        Ok(wrapper.data)
    }

    pub async fn players(&self) -> Result<Vec<Player>, BoxErr> {
        let bytes = self.smart_query(&QueryMsg::GetPlayers {}.to_json_vec()?).await?;
        let raw: Vec<RawPlayer> = serde_json::from_slice(&bytes)?;
        Ok(raw.into_iter().map(Player::from).collect())
    }

    pub async fn phase(&self) -> Result<Phase, BoxErr> {
        let bytes = self.smart_query(&QueryMsg::GetPhase {}.to_json_vec()?).await?;
        let resp: PhaseResponse = serde_json::from_slice(&bytes)?;
        Ok(resp.into_phase())
    }

    pub async fn config(&self) -> Result<ConfigResponse, BoxErr> {
        let bytes = self.smart_query(&QueryMsg::GetConfig {}.to_json_vec()?).await?;
        let resp: ConfigResponse = serde_json::from_slice(&bytes)?;
        Ok(resp)
    }

    pub async fn last_eliminated(&self) -> Result<Option<String>, BoxErr> {
        let bytes = self
            .smart_query(&QueryMsg::GetLastEliminated {}.to_json_vec()?)
            .await?;
        let resp: LastEliminatedResponse = serde_json::from_slice(&bytes)?;
        Ok(resp.eliminated)
    }
}

/// Players and phase are always refreshed together; the two fetches run
/// concurrently and both outcomes are reported so the caller can apply
/// whichever halves succeeded.
pub async fn fetch_table(
    client: &QueryClient,
) -> (Result<Vec<Player>, String>, Result<Phase, String>) {
    let (players, phase) = tokio::join!(client.players(), client.phase());
    (
        players.map_err(|e| e.to_string()),
        phase.map_err(|e| e.to_string()),
    )
}
