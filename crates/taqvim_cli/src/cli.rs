use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use taqvim_rs::{CalendarId, SearchMode, Season, Weekday};

/// Calendar conversion and solar astronomy.
#[derive(Parser)]
#[command(name = "taqvim", version, about = "Multi-calendar converter and solar almanac")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./taqvim.toml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a date between calendars
    Convert {
        /// Date as YYYY-MM-DD (or YYYY-Www-D for iso-week)
        #[arg(allow_hyphen_values = true)]
        date: String,
        /// Source calendar
        #[arg(long)]
        from: CalendarId,
        /// Target calendar
        #[arg(long)]
        to: CalendarId,
    },
    /// Julian Day at civil midnight of a date
    ToJd {
        #[arg(allow_hyphen_values = true)]
        date: String,
        #[arg(long)]
        calendar: Option<CalendarId>,
    },
    /// Date of the civil day containing a Julian Day
    FromJd {
        #[arg(allow_negative_numbers = true)]
        jd: f64,
        #[arg(long)]
        calendar: Option<CalendarId>,
    },
    /// Whether a year is a leap year
    Leap {
        #[arg(allow_negative_numbers = true)]
        year: i32,
        #[arg(long)]
        calendar: Option<CalendarId>,
    },
    /// Number of days in a month (0 if the month does not exist)
    MonthLength {
        #[arg(allow_negative_numbers = true)]
        year: i32,
        /// 1-based month
        month: u32,
        #[arg(long)]
        calendar: Option<CalendarId>,
    },
    /// Day of the week of a Julian Day
    Weekday {
        #[arg(allow_negative_numbers = true)]
        jd: f64,
    },
    /// Search for a weekday relative to a Julian Day
    FindWeekday {
        #[arg(allow_negative_numbers = true)]
        jd: f64,
        /// English or Persian name, abbreviation, or 0-6 (Sunday = 0)
        #[arg(long)]
        weekday: Weekday,
        #[arg(long, value_enum, default_value_t = ModeArg::Nearest)]
        mode: ModeArg,
    },
    /// Equinox and solstice instants of a year
    Season {
        #[arg(allow_negative_numbers = true)]
        year: i32,
        /// Only this event (default: all four)
        #[arg(long, value_enum)]
        which: Option<SeasonArg>,
        /// Report UT instead of TT
        #[arg(long)]
        ut: bool,
    },
    /// Delta-T (TT - UT) in seconds for a decimal year
    DeltaT {
        #[arg(allow_negative_numbers = true)]
        year: f64,
    },
    /// Equation of time at a Julian Day
    EquationOfTime {
        #[arg(allow_negative_numbers = true)]
        jd: f64,
    },
    /// Solar position at a Julian Day
    Sun {
        #[arg(allow_negative_numbers = true)]
        jd: f64,
    },
    /// Nutation in longitude and obliquity at a Julian Day
    Nutation {
        #[arg(allow_negative_numbers = true)]
        jd: f64,
    },
    /// Mean obliquity of the ecliptic at a Julian Day
    Obliquity {
        #[arg(allow_negative_numbers = true)]
        jd: f64,
    },
    /// Today's date in the Persian and Gregorian calendars
    PersianToday,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Nearest,
    Next,
    NextOrCurrent,
    Previous,
    PreviousOrCurrent,
}

impl From<ModeArg> for SearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Nearest => Self::Nearest,
            ModeArg::Next => Self::Next,
            ModeArg::NextOrCurrent => Self::NextOrCurrent,
            ModeArg::Previous => Self::Previous,
            ModeArg::PreviousOrCurrent => Self::PreviousOrCurrent,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeasonArg {
    March,
    June,
    September,
    December,
}

impl From<SeasonArg> for Season {
    fn from(which: SeasonArg) -> Self {
        match which {
            SeasonArg::March => Self::MarchEquinox,
            SeasonArg::June => Self::JuneSolstice,
            SeasonArg::September => Self::SeptemberEquinox,
            SeasonArg::December => Self::DecemberSolstice,
        }
    }
}
