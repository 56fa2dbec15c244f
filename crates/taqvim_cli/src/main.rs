mod cli;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use taqvim_rs::{
    ALL_SEASONS, CalendarId, DualCalendarDate, Season, Weekday, convert_text, days_in_month,
    delta_t, equation_of_time, equinox_or_solstice, find_weekday, from_jd, is_leap_year,
    jd_of_text, nutation_deg, obliquity_of_ecliptic_deg, season_ut, solar_position, time_of_day,
};

use crate::cli::{Cli, Commands};
use crate::config::Settings;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    if let Err(e) = run(cli.command, &settings) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Commands, settings: &Settings) -> Result<()> {
    let prec = settings.precision;
    let cal = |c: Option<CalendarId>| c.unwrap_or(settings.calendar);

    match command {
        Commands::Convert { date, from, to } => {
            let out = convert_text(&date, from, to)?;
            println!("{}", to.format(out));
        }

        Commands::ToJd { date, calendar } => {
            let jd = jd_of_text(&date, cal(calendar))?;
            println!("{jd:.prec$}");
        }

        Commands::FromJd { jd, calendar } => {
            let calendar = cal(calendar);
            println!(
                "{} {} ({calendar})",
                calendar.format(from_jd(calendar, jd)),
                time_of_day(jd)
            );
        }

        Commands::Leap { year, calendar } => {
            let calendar = cal(calendar);
            let kind = if is_leap_year(calendar, year) { "leap" } else { "common" };
            println!("{year} ({calendar}): {kind} year");
        }

        Commands::MonthLength {
            year,
            month,
            calendar,
        } => {
            println!("{}", days_in_month(cal(calendar), year, month));
        }

        Commands::Weekday { jd } => {
            println!("{}", settings.weekday_names.render(Weekday::of_jd(jd)));
        }

        Commands::FindWeekday { jd, weekday, mode } => {
            let found = find_weekday(weekday, jd, mode.into());
            let calendar = settings.calendar;
            println!(
                "{found:.prec$}  {} {}",
                settings.weekday_names.render(weekday),
                calendar.format(from_jd(calendar, found))
            );
        }

        Commands::Season { year, which, ut } => {
            let seasons: Vec<Season> = match which {
                Some(w) => vec![w.into()],
                None => ALL_SEASONS.to_vec(),
            };
            let scale = if ut { "UT" } else { "TT" };
            for season in seasons {
                let jd = if ut {
                    season_ut(year, season)
                } else {
                    equinox_or_solstice(year, season)
                };
                println!(
                    "{:<18} JD {jd:.prec$}  {} {} {scale}",
                    season.name(),
                    from_jd(CalendarId::Gregorian, jd),
                    time_of_day(jd)
                );
            }
        }

        Commands::DeltaT { year } => {
            println!("{:.3} s", delta_t(year));
        }

        Commands::EquationOfTime { jd } => {
            let e = equation_of_time(jd);
            println!("{e:.prec$} day ({:.2} min)", e * 1440.0);
        }

        Commands::Sun { jd } => {
            let s = solar_position(jd);
            println!("Mean longitude:        {:.6} deg", s.mean_longitude_deg);
            println!("Mean anomaly:          {:.6} deg", s.mean_anomaly_deg);
            println!("Eccentricity:          {:.9}", s.eccentricity);
            println!("Equation of center:    {:.6} deg", s.equation_of_center_deg);
            println!("True longitude:        {:.6} deg", s.true_longitude_deg);
            println!("True anomaly:          {:.6} deg", s.true_anomaly_deg);
            println!("Radius vector:         {:.9} AU", s.radius_au);
            println!("Apparent longitude:    {:.6} deg", s.apparent_longitude_deg);
            println!("Right ascension:       {:.6} deg", s.right_ascension_deg);
            println!("Declination:           {:.6} deg", s.declination_deg);
            println!("Apparent RA:           {:.6} deg", s.apparent_right_ascension_deg);
            println!("Apparent declination:  {:.6} deg", s.apparent_declination_deg);
        }

        Commands::Nutation { jd } => {
            let (dpsi, deps) = nutation_deg(jd);
            println!("dpsi = {:.4}\" ({dpsi:.9} deg)", dpsi * 3600.0);
            println!("deps = {:.4}\" ({deps:.9} deg)", deps * 3600.0);
        }

        Commands::Obliquity { jd } => {
            println!("{:.9} deg", obliquity_of_ecliptic_deg(jd));
        }

        Commands::PersianToday => {
            let today = DualCalendarDate::now();
            println!(
                "{today} {}  (Gregorian {})",
                settings.weekday_names.render(today.weekday()),
                today.gregorian_date()
            );
        }
    }

    Ok(())
}
