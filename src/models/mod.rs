use std::fmt;

use serde::{Deserialize, Deserializer};

/// Transaction kinds understood by the `transactions` export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "DEFAULT")]
    Default,
    #[serde(rename = "WAIVER")]
    Waiver,
    #[serde(rename = "BBID_WAIVER")]
    BbidWaiver,
    #[serde(rename = "FREE_AGENT")]
    FreeAgent,
    #[serde(rename = "WAIVER_REQUEST")]
    WaiverRequest,
    #[serde(rename = "BBID_WAIVER_REQUEST")]
    BbidWaiverRequest,
    #[serde(rename = "TRADE")]
    Trade,
    #[serde(rename = "IR")]
    Ir,
    #[serde(rename = "TAXI")]
    Taxi,
    #[serde(rename = "AUCTION_INIT")]
    AuctionInit,
    #[serde(rename = "AUCTION_BID")]
    AuctionBid,
    #[serde(rename = "AUCTION_WON")]
    AuctionWon,
    #[serde(rename = "SURVIVOR_PICK")]
    SurvivorPick,
    #[serde(rename = "POOL_PICK")]
    PoolPick,
    #[serde(rename = "*")]
    All,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Default => "DEFAULT",
            TransactionType::Waiver => "WAIVER",
            TransactionType::BbidWaiver => "BBID_WAIVER",
            TransactionType::FreeAgent => "FREE_AGENT",
            TransactionType::WaiverRequest => "WAIVER_REQUEST",
            TransactionType::BbidWaiverRequest => "BBID_WAIVER_REQUEST",
            TransactionType::Trade => "TRADE",
            TransactionType::Ir => "IR",
            TransactionType::Taxi => "TAXI",
            TransactionType::AuctionInit => "AUCTION_INIT",
            TransactionType::AuctionBid => "AUCTION_BID",
            TransactionType::AuctionWon => "AUCTION_WON",
            TransactionType::SurvivorPick => "SURVIVOR_PICK",
            TransactionType::PoolPick => "POOL_PICK",
            TransactionType::All => "*",
        }
    }
}

/// Time window for ADP and AAV reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    #[default]
    All,
    Recent,
    Draft,
    June,
    July,
    #[serde(rename = "AUG1")]
    Aug1,
    #[serde(rename = "AUG15")]
    Aug15,
    Start,
    Mid,
    Playoff,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::All => "ALL",
            Period::Recent => "RECENT",
            Period::Draft => "DRAFT",
            Period::June => "JUNE",
            Period::July => "JULY",
            Period::Aug1 => "AUG1",
            Period::Aug15 => "AUG15",
            Period::Start => "START",
            Period::Mid => "MID",
            Period::Playoff => "PLAYOFF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PoolType {
    #[default]
    #[serde(rename = "NFL")]
    Nfl,
    Fantasy,
}

impl PoolType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolType::Nfl => "NFL",
            PoolType::Fantasy => "Fantasy",
        }
    }
}

/// Only free agents, for the "top" player lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TopStatus {
    #[serde(rename = "FA")]
    FreeAgent,
}

/// Only free agents, for player and projected scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ScoreStatus {
    #[serde(rename = "freeagent")]
    FreeAgent,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FA")
    }
}

impl fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("freeagent")
    }
}

/// A week number, or `YTD` for the whole season so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ScoringWeek {
    Week(u32),
    YearToDate,
}

impl TryFrom<String> for ScoringWeek {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if raw.eq_ignore_ascii_case("YTD") {
            return Ok(ScoringWeek::YearToDate);
        }
        raw.trim()
            .parse()
            .map(ScoringWeek::Week)
            .map_err(|_| format!("expected a week number or YTD, got {raw:?}"))
    }
}

impl fmt::Display for ScoringWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringWeek::Week(week) => write!(f, "{week}"),
            ScoringWeek::YearToDate => f.write_str("YTD"),
        }
    }
}

/// A week number, or `ALL` for the full NFL season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum NflWeek {
    Week(u32),
    All,
}

impl TryFrom<String> for NflWeek {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if raw.eq_ignore_ascii_case("ALL") {
            return Ok(NflWeek::All);
        }
        raw.trim()
            .parse()
            .map(NflWeek::Week)
            .map_err(|_| format!("expected a week number or ALL, got {raw:?}"))
    }
}

impl fmt::Display for NflWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NflWeek::Week(week) => write!(f, "{week}"),
            NflWeek::All => f.write_str("ALL"),
        }
    }
}

/// Parse a query-string boolean the way browsers and form clients send them.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `deserialize_with` for `bool` query fields; pair with `#[serde(default)]`.
pub fn query_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_bool(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("expected a boolean, got {raw:?}")))
}

/// `deserialize_with` for `Option<bool>` query fields; pair with `#[serde(default)]`.
pub fn query_opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    query_bool(deserializer).map(Some)
}
