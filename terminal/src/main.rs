//! Swap terminal binary
//!
//! Reads commands from stdin and prints the trade page as JSON after each one.
//!
//! ```text
//! terminal [TOKEN_LIST.json]
//! ```

use anyhow::Context;
use lib_core::config::init_config;
use lib_core::{Decimal, Propagation};
use serde_json::json;
use shared::{truncate_address, ConnectorId, WalletInfo};
use std::sync::Arc;
use terminal::app::{ToggleContext, TradePair, TradeWidget, WalletModal};
use terminal::core::service::{AccountStore, WalletConnector};
use terminal::debug::{self, DebugConfig};
use terminal::services::{Debouncer, InMemoryAccountStore, LocalConnector, TokenList};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const DEMO_TOKENS: &str = r#"[
    {"address": "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE", "symbol": "ETH",
     "name": "Ether", "decimals": 18, "usdPrice": "3120.55", "balance": "1.5"},
    {"address": "0x1F573D6Fb3F13d689FF844B4cE37794d79a7FF1C", "symbol": "BNT",
     "name": "Bancor Network Token", "decimals": 18, "usdPrice": "2.47", "balance": "250"},
    {"address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "symbol": "USDC",
     "name": "USD Coin", "decimals": 6, "usdPrice": "1"},
    {"address": "0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599", "symbol": "WBTC",
     "name": "Wrapped BTC", "decimals": 8}
]"#;

const HELP: &str = "commands: type <amount> | toggle | max | from <token> | to <token> | switch \
                    | price <token> <usd> | search <query> | connect <wallet> | account \
                    | view | help | quit";

type Modal = WalletModal<dyn WalletConnector, dyn AccountStore>;

struct Session {
    widget: TradeWidget,
    tokens: TokenList,
    wallet: Modal,
    accounts: Arc<InMemoryAccountStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = debug::init_logger(&DebugConfig::from_env());
    let config = init_config().context("invalid amount input configuration")?;

    let tokens = match std::env::args().nth(1) {
        Some(path) => {
            let json = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read token list {}", path))?;
            TokenList::from_json(&json).with_context(|| format!("invalid token list {}", path))?
        }
        None => TokenList::from_json(DEMO_TOKENS)?,
    };
    tracing::info!(
        tokens = tokens.len(),
        debounce_ms = config.debounce_ms,
        "swap terminal starting"
    );

    let (quote_tx, mut quote_rx) = mpsc::unbounded_channel::<String>();
    let debouncer = Debouncer::spawn(config.debounce_delay(), move |amount| {
        tracing::info!(%amount, "quote requested");
        if quote_tx.send(amount).is_err() {
            tracing::debug!("quote receiver closed");
        }
    });
    let propagation = Propagation::set_input_debounced(
        |amount: &str| tracing::debug!(%amount, "input amount set"),
        debouncer,
    );

    let pair = TradePair::new(
        std::env::var("TRADE_FROM").ok(),
        std::env::var("TRADE_TO").ok(),
    );
    let widget = TradeWidget::new(&pair, &tokens, ToggleContext::new(), config, propagation);

    let connector: Arc<dyn WalletConnector> = Arc::new(LocalConnector::new(
        std::env::var("WALLET_ADDRESS")
            .unwrap_or_else(|_| "0x52908400098527886E0F7030069857D2E4169EE7".to_string()),
    ));
    let accounts = Arc::new(InMemoryAccountStore::new());
    let store: Arc<dyn AccountStore> = accounts.clone();
    let wallet = WalletModal::new(supported_wallets(), connector, store);

    let mut session = Session {
        widget,
        tokens,
        wallet,
        accounts,
    };

    println!("{}", HELP);
    print_view(&session)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                if !handle_command(&mut session, line.trim()).await? {
                    break;
                }
            }
            Some(amount) = quote_rx.recv() => {
                let quote = if amount.is_empty() {
                    Some(String::new())
                } else {
                    session.widget.spot_quote(&amount)
                };
                match quote {
                    Some(quote) if session.widget.apply_quote(&quote) => print_view(&session)?,
                    _ => tracing::info!(%amount, "no quote available"),
                }
            }
        }
    }

    tracing::info!("swap terminal stopped");
    Ok(())
}

async fn handle_command(session: &mut Session, line: &str) -> anyhow::Result<bool> {
    let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
    let arg = arg.trim();

    match command {
        "" => return Ok(true),
        "quit" | "exit" => return Ok(false),
        "help" => println!("{}", HELP),
        "type" => {
            session.widget.from_mut().on_input_change(arg);
        }
        "toggle" => {
            session.widget.toggle();
        }
        "max" => {
            if !session.widget.from_mut().set_max_amount() {
                println!("balance unknown");
            }
        }
        "from" | "to" => match session.tokens.lookup(arg).cloned() {
            Some(token) if command == "from" => session.widget.select_from(token),
            Some(token) => session.widget.select_to(token),
            None => println!("unknown token {}", arg),
        },
        "switch" => {
            if !session.widget.switch() {
                println!("select both tokens first");
            }
        }
        "search" => {
            let field = session.widget.to();
            let matches: Vec<_> = field
                .picker_tokens(&session.tokens, arg)
                .into_iter()
                .map(|token| json!({ "symbol": token.symbol, "name": token.name }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&matches)?);
            return Ok(true);
        }
        "connect" => {
            let Some(wallet) = supported_wallets()
                .into_iter()
                .find(|w| w.name.eq_ignore_ascii_case(arg))
            else {
                println!("unknown wallet {}", arg);
                return Ok(true);
            };
            session.wallet.open();
            match session.wallet.try_connecting(wallet).await {
                Ok(Some(account)) => println!("connected {}", truncate_address(&account.address)),
                Ok(None) => println!("waiting for the wallet to switch network"),
                Err(e) => println!("{}", e),
            }
            println!("{}", serde_json::to_string_pretty(&session.wallet.view())?);
            return Ok(true);
        }
        "price" => {
            let (key, usd) = arg.rsplit_once(' ').unwrap_or((arg, ""));
            let Some(token) = session.tokens.lookup(key.trim()).cloned() else {
                println!("unknown token {}", key);
                return Ok(true);
            };
            match Decimal::parse(usd.trim()) {
                Ok(price) => {
                    let token = token.with_price(price);
                    session.tokens.upsert(token.clone());
                    session.widget.update_token(token);
                }
                Err(e) => println!("{}", e),
            }
        }
        "account" => {
            let account = json!({
                "account": session.accounts.account(),
                "autoLogin": session.accounts.auto_login(),
            });
            println!("{}", serde_json::to_string_pretty(&account)?);
            return Ok(true);
        }
        "view" => {}
        other => println!("unknown command {}; {}", other, HELP),
    }

    print_view(session)?;
    Ok(true)
}

fn print_view(session: &Session) -> anyhow::Result<()> {
    let view = json!({
        "from": session.widget.from().view(),
        "to": session.widget.to().view(),
    });
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn supported_wallets() -> Vec<WalletInfo> {
    vec![
        WalletInfo::new("MetaMask", "metamask.svg", ConnectorId::new("injected")),
        WalletInfo::new("WalletConnect", "walletconnect.svg", ConnectorId::new("walletconnect")),
        WalletInfo::new("Coinbase Wallet", "coinbase.svg", ConnectorId::new("walletlink")),
    ]
}
