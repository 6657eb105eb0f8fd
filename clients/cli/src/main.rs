use clap::{Parser, Subcommand};
use mafia::wire::{
    ConfigResponse, ExecuteMsg, LastEliminatedResponse, PhaseResponse, QueryMsg, RawPlayer,
    EVENT_GAME_ENDED, EVENT_VOTE_RESULT,
};
use mafia::{
    check_join, check_tally, check_target, check_vote, derive, Phase, Player, PlayerAction,
    Snapshot, SnapshotStore,
};
use mob::{ChainConfig, Client, RustSigner};
use prost::Message;
use std::sync::Arc;
use tokio::runtime::Runtime;

type BoxErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "mafia-cli", about = "Headless client for the on-chain mafia game")]
struct Cli {
    /// Wallet mnemonic; read-only commands work without it
    #[arg(long, env = "MAFIA_MNEMONIC")]
    mnemonic: Option<String>,

    #[arg(
        long,
        env = "RPC_URL",
        default_value = "https://rpc.xion-testnet-2.burnt.com:443"
    )]
    rpc_url: String,

    #[arg(long, env = "CHAIN_ID", default_value = "xion-testnet-2")]
    chain_id: String,

    /// Deployed game contract address
    #[arg(long, env = "CONTRACT")]
    contract: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the table and what the local wallet may do right now
    Status,
    /// Pay the join fee and register for the game
    Join,
    /// Submit the night action against a living player
    Target { address: String },
    /// Cast a ballot naming the suspected moderator
    Vote { address: String },
    /// Trigger the on-chain vote tally
    Tally,
    /// Poll the contract and report phase and player transitions
    Watch {
        /// Seconds between polls
        #[arg(long, default_value = "10")]
        interval: u64,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BoxErr> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match &cli.command {
        Command::Status => {
            let local = local_address(&cli)?;
            let snapshot = fetch_snapshot(&rt, &cli)?;
            print_table(&snapshot, local.as_deref());
        }
        Command::Join => {
            let (client, address) = signer_client(&cli)?;
            let snapshot = fetch_snapshot(&rt, &cli)?;
            check_join(&snapshot, Some(&address))?;

            let config: ConfigResponse = rt.block_on(query_config(&cli.rpc_url, &cli.contract))?;
            log::info!("Joining with fee {} {}", config.join_fee.0, config.denom);
            let funds = vec![mob::Coin::new(&config.denom, config.join_fee.0.clone())];

            let tx = execute_and_confirm(
                &client,
                &cli.contract,
                &ExecuteMsg::JoinGame {},
                funds,
                "Join mafia game",
            )?;
            log::info!("Join confirmed: {}", tx.txhash);
            settle_and_print(&rt, &cli, Some(&address))?;
        }
        Command::Target { address: target } => {
            let (client, address) = signer_client(&cli)?;
            let snapshot = fetch_snapshot(&rt, &cli)?;
            check_target(&snapshot, Some(&address), target)?;

            let tx = execute_and_confirm(
                &client,
                &cli.contract,
                &ExecuteMsg::SelectTarget {
                    target: target.clone(),
                },
                vec![],
                "Select target",
            )?;
            log::info!("Target {target} submitted: {}", tx.txhash);
            settle_and_print(&rt, &cli, Some(&address))?;
        }
        Command::Vote { address: choice } => {
            let (client, address) = signer_client(&cli)?;
            let snapshot = fetch_snapshot(&rt, &cli)?;
            check_vote(&snapshot, Some(&address), choice)?;

            let tx = execute_and_confirm(
                &client,
                &cli.contract,
                &ExecuteMsg::VoteModerator {
                    choice: choice.clone(),
                },
                vec![],
                "Vote moderator",
            )?;
            log::info!("Ballot for {choice} confirmed: {}", tx.txhash);
            settle_and_print(&rt, &cli, Some(&address))?;
        }
        Command::Tally => {
            let (client, address) = signer_client(&cli)?;
            let snapshot = fetch_snapshot(&rt, &cli)?;
            check_tally(&snapshot, Some(&address))?;

            let tx = execute_and_confirm(
                &client,
                &cli.contract,
                &ExecuteMsg::ComputeVoteResult {},
                vec![],
                "Compute vote result",
            )?;
            log::info!("Tally triggered: {}", tx.txhash);
            settle_and_print(&rt, &cli, Some(&address))?;
        }
        Command::Watch { interval } => watch(&rt, &cli, *interval)?,
    }

    Ok(())
}

// ── Wallet setup ──

fn local_address(cli: &Cli) -> Result<Option<String>, BoxErr> {
    match &cli.mnemonic {
        Some(mnemonic) => {
            let signer = RustSigner::from_mnemonic(mnemonic.clone(), "xion".into(), None)?;
            Ok(Some(signer.address()))
        }
        None => Ok(None),
    }
}

fn signer_client(cli: &Cli) -> Result<(Client, String), BoxErr> {
    let mnemonic = cli
        .mnemonic
        .as_ref()
        .ok_or("MAFIA_MNEMONIC is required for this command")?;
    let signer = RustSigner::from_mnemonic(mnemonic.clone(), "xion".into(), None)?;
    let address = signer.address();
    log::info!("Wallet address: {address}");

    let chain_config = ChainConfig::new(
        cli.chain_id.clone(),
        cli.rpc_url.clone(),
        "xion".to_string(),
    );
    let client = Client::new_with_signer(chain_config, Arc::new(signer))?;
    Ok((client, address))
}

// ── Snapshot assembly ──

/// One-shot fetch of players and phase. Both reads must land before the
/// snapshot is considered settled; the last-eliminated read is advisory.
fn fetch_snapshot(rt: &Runtime, cli: &Cli) -> Result<Snapshot, BoxErr> {
    let mut store = SnapshotStore::new();
    let seq = store.begin_refresh();

    let (players, phase) = rt.block_on(async {
        tokio::join!(
            query_players(&cli.rpc_url, &cli.contract),
            query_phase(&cli.rpc_url, &cli.contract)
        )
    });
    store.apply_players(seq, players?);
    store.apply_phase(seq, phase?);

    if store.snapshot().phase == Some(Phase::Voting) {
        match rt.block_on(query_last_eliminated(&cli.rpc_url, &cli.contract)) {
            Ok(eliminated) => store.set_last_eliminated(eliminated),
            Err(e) => log::warn!("Last-eliminated query failed: {e}"),
        }
    }

    Ok(store.snapshot().clone())
}

fn settle_and_print(rt: &Runtime, cli: &Cli, local: Option<&str>) -> Result<(), BoxErr> {
    let snapshot = fetch_snapshot(rt, cli)?;
    print_table(&snapshot, local);
    Ok(())
}

fn print_table(snapshot: &Snapshot, local: Option<&str>) {
    let vm = derive(snapshot, local);

    match snapshot.phase {
        Some(phase) => println!("Phase: {} - {}", phase.label(), phase.description()),
        None => println!("Phase: not reported"),
    }
    if snapshot.ended {
        println!("The game has ended.");
    }

    println!("Players ({}):", snapshot.players.len());
    for player in &snapshot.players {
        let mut flags = Vec::new();
        if Some(player.address.as_str()) == local {
            flags.push("you");
        }
        if !player.is_alive {
            flags.push("dead");
        }
        if player.has_voted {
            flags.push("voted");
        }
        if flags.is_empty() {
            println!("  {}", player.address);
        } else {
            println!("  {}  ({})", player.address, flags.join(", "));
        }
    }

    if let Some(me) = &vm.current_player {
        println!("Your role: {}", me.role.label());
    }
    if let Some(eliminated) = &snapshot.last_eliminated {
        println!("Last eliminated: {eliminated}");
    }

    match vm.action {
        Some(action) => println!("Available action: {}", action.label()),
        None => println!("No action available right now"),
    }
    if vm.can_tally {
        println!("You may also trigger the vote tally.");
    }
}

// ── Watch loop ──

fn watch(rt: &Runtime, cli: &Cli, interval: u64) -> Result<(), BoxErr> {
    let local = local_address(cli)?;
    let mut store = SnapshotStore::new();
    let mut last_phase: Option<Phase> = None;
    let mut last_count: Option<usize> = None;
    let mut last_alive: Option<usize> = None;
    let mut last_action: Option<PlayerAction> = None;

    log::info!("Watching {} every {interval}s", cli.contract);

    loop {
        let seq = store.begin_refresh();
        let (players, phase) = rt.block_on(async {
            tokio::join!(
                query_players(&cli.rpc_url, &cli.contract),
                query_phase(&cli.rpc_url, &cli.contract)
            )
        });
        match players {
            Ok(players) => {
                store.apply_players(seq, players);
            }
            Err(e) => log::warn!("Player fetch failed, keeping last snapshot: {e}"),
        }
        match phase {
            Ok(phase) => {
                store.apply_phase(seq, phase);
            }
            Err(e) => log::warn!("Phase fetch failed, keeping last snapshot: {e}"),
        }

        let snapshot = store.snapshot();
        if snapshot.phase != last_phase {
            if let Some(phase) = snapshot.phase {
                log::info!("Phase: {} - {}", phase.label(), phase.description());
            }
            last_phase = snapshot.phase;
        }

        let count = snapshot.players.len();
        if last_count != Some(count) {
            log::info!("Players at the table: {count}");
            last_count = Some(count);
        }

        let alive = snapshot.players.iter().filter(|p| p.is_alive).count();
        if last_alive.is_some_and(|prev| alive < prev) {
            for player in snapshot.players.iter().filter(|p| !p.is_alive) {
                log::info!("Eliminated: {}", player.address);
            }
        }
        last_alive = Some(alive);

        let vm = derive(snapshot, local.as_deref());
        if vm.action != last_action {
            if let Some(action) = vm.action {
                log::info!("You can now {}", action.label());
            }
            last_action = vm.action;
        }

        if snapshot.ended {
            log::info!("Game over");
            return Ok(());
        }

        std::thread::sleep(std::time::Duration::from_secs(interval));
    }
}

// ── Contract queries (async) ──

async fn query_contract_raw(
    rpc_url: &str,
    contract_addr: &str,
    query_msg: &[u8],
) -> Result<Vec<u8>, BoxErr> {
    use tendermint_rpc::{Client as TmClient, HttpClient};

    let path = "/cosmwasm.wasm.v1.Query/SmartContractState";
    let data = {
        let req = xion_types::cosmwasm::wasm::v1::QuerySmartContractStateRequest {
            address: contract_addr.to_string(),
            query_data: query_msg.to_vec(),
        };
        req.encode_to_vec()
    };

    let tm_client = HttpClient::new(rpc_url)?;
    let response = tm_client
        .abci_query(Some(path.to_string()), data, None, false)
        .await?;

    if response.code.is_err() {
        return Err(format!("ABCI query failed: {}", response.log).into());
    }

    let res_wrapper = xion_types::cosmwasm::wasm::v1::QuerySmartContractStateResponse::decode(
        response.value.as_slice(),
    )?;
    Ok(res_wrapper.data)
}

async fn query_players(rpc_url: &str, contract_addr: &str) -> Result<Vec<Player>, BoxErr> {
    let query_bytes = QueryMsg::GetPlayers {}.to_json_vec()?;
    let response_bytes = query_contract_raw(rpc_url, contract_addr, &query_bytes).await?;
    let raw: Vec<RawPlayer> = serde_json::from_slice(&response_bytes)?;
    Ok(raw.into_iter().map(Player::from).collect())
}

async fn query_phase(rpc_url: &str, contract_addr: &str) -> Result<Phase, BoxErr> {
    let query_bytes = QueryMsg::GetPhase {}.to_json_vec()?;
    let response_bytes = query_contract_raw(rpc_url, contract_addr, &query_bytes).await?;
    let resp: PhaseResponse = serde_json::from_slice(&response_bytes)?;
    Ok(resp.into_phase())
}

async fn query_config(rpc_url: &str, contract_addr: &str) -> Result<ConfigResponse, BoxErr> {
    let query_bytes = QueryMsg::GetConfig {}.to_json_vec()?;
    let response_bytes = query_contract_raw(rpc_url, contract_addr, &query_bytes).await?;
    Ok(serde_json::from_slice(&response_bytes)?)
}

async fn query_last_eliminated(
    rpc_url: &str,
    contract_addr: &str,
) -> Result<Option<String>, BoxErr> {
    let query_bytes = QueryMsg::GetLastEliminated {}.to_json_vec()?;
    let response_bytes = query_contract_raw(rpc_url, contract_addr, &query_bytes).await?;
    let resp: LastEliminatedResponse = serde_json::from_slice(&response_bytes)?;
    Ok(resp.eliminated)
}

// ── TX execution ──

fn execute_and_confirm(
    client: &Client,
    contract_addr: &str,
    msg: &ExecuteMsg,
    funds: Vec<mob::Coin>,
    memo: &str,
) -> Result<mob::TxResponse, BoxErr> {
    let tx = client.execute_contract(
        contract_addr.to_string(),
        msg.to_json_vec()?,
        funds,
        Some(memo.to_string()),
        None,
    )?;

    if tx.code != 0 {
        return Err(format!("Transaction failed: {}", tx.raw_log).into());
    }

    if tx.raw_log.contains(EVENT_GAME_ENDED) {
        log::info!("The contract reports the game has ended");
    }
    if tx.raw_log.contains(EVENT_VOTE_RESULT) {
        log::info!("Vote result computed");
    }
    Ok(tx)
}
