//! Remote data-source configuration constants and types.

/// Configuration for the CoinGecko market-chart endpoint (target series)
pub struct CoinGeckoSettings {
    pub market_chart_url: &'static str,
    pub vs_currency: &'static str,
    /// History length requested, "max" = full history
    pub days: &'static str,
    /// Bitcoin market cap is scaled up to approximate the total crypto market
    pub market_cap_multiplier: f64,
}

/// Configuration for the FRED CSV endpoint (driver series)
pub struct FredSettings {
    pub csv_url: &'static str,
    /// FRED series identifier for the M2 monetary aggregate
    pub series_id: &'static str,
    /// Earliest observation requested (cosd parameter)
    pub start_date: &'static str,
}

/// Default values for the HTTP client
pub struct ClientDefaults {
    pub timeout_secs: u64,
}

/// The Master Source Configuration Struct
pub struct SourceConfig {
    pub coingecko: CoinGeckoSettings,
    pub fred: FredSettings,
    pub client: ClientDefaults,
}

pub const SOURCES: SourceConfig = SourceConfig {
    coingecko: CoinGeckoSettings {
        market_chart_url: "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart",
        vs_currency: "usd",
        days: "max",
        market_cap_multiplier: 1.75,
    },
    fred: FredSettings {
        csv_url: "https://fred.stlouisfed.org/graph/fredgraph.csv",
        series_id: "M2SL",
        start_date: "2013-01-01",
    },
    client: ClientDefaults { timeout_secs: 15 },
};
