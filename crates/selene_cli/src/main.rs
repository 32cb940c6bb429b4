use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;
use selene_config::{Settings, load_catalog, load_settings};
use selene_core::{Body, Engine, GeoLocation, Observer, RefractionModel};
use selene_frames::{nutation_arcsec, true_obliquity_deg};
use selene_geo::{Catalog, DistanceMethod, GeoPoint, NamedPlace, SurfaceBody, compare};
use selene_time::{
    ResolvedInstant, UtcTime, equation_of_equinoxes_rad, gast_rad, gmst_rad, jd_to_centuries,
    local_sidereal_time_rad,
};

#[derive(Parser)]
#[command(name = "selene", about = "Lunar and terrestrial place guide")]
struct Cli {
    /// Settings file (default: $SELENE_CONFIG, ./selene.toml, ./configs/selene.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Place catalog file, overriding the settings
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalogued places
    Places {
        /// Only places on this body (moon or earth)
        #[arg(long)]
        body: Option<SurfaceBody>,
    },
    /// Show one catalogued place
    Place {
        /// Name or slug
        name: String,
    },
    /// Surface distance between two catalogued places
    Distance {
        from: String,
        to: String,
        /// planar or exact (default from settings)
        #[arg(long)]
        method: Option<DistanceMethod>,
        /// Print both methods and their difference
        #[arg(long)]
        compare: bool,
    },
    /// Surface distance between two lat/lon points
    DistanceCoords {
        #[arg(long, allow_hyphen_values = true)]
        lat1: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon1: f64,
        #[arg(long, allow_hyphen_values = true)]
        lat2: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon2: f64,
        /// Body whose mean radius to use
        #[arg(long, default_value = "moon")]
        body: SurfaceBody,
        /// Sphere radius in km, overriding --body
        #[arg(long)]
        radius: Option<f64>,
        /// planar or exact (default from settings)
        #[arg(long)]
        method: Option<DistanceMethod>,
    },
    /// Moon altitude/azimuth for an observer
    Moon {
        #[command(flatten)]
        sky: SkyArgs,
    },
    /// Sun altitude/azimuth for an observer
    Sun {
        #[command(flatten)]
        sky: SkyArgs,
    },
    /// Greenwich and local sidereal time
    Sidereal {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ), default now
        #[arg(long)]
        date: Option<String>,
        /// East longitude in degrees
        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        lon: f64,
        /// UT1 − UTC in seconds
        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        dut1: f64,
    },
}

#[derive(clap::Args)]
struct SkyArgs {
    /// Geodetic latitude in degrees (default from settings)
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// East longitude in degrees (default from settings)
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Height above the ellipsoid in metres (default from settings)
    #[arg(long, allow_hyphen_values = true)]
    height: Option<f64>,
    /// UTC datetime (YYYY-MM-DDThh:mm:ssZ), default now
    #[arg(long)]
    date: Option<String>,
    /// Apply atmospheric refraction
    #[arg(long)]
    refraction: bool,
    /// UT1 − UTC in seconds (default from settings)
    #[arg(long, allow_hyphen_values = true)]
    dut1: Option<f64>,
}

fn load_settings_or_exit(path: Option<&PathBuf>) -> Settings {
    load_settings(path.map(PathBuf::as_path)).unwrap_or_else(|e| {
        eprintln!("Failed to load settings: {e}");
        std::process::exit(1);
    })
}

fn load_places(settings: &Settings, override_path: Option<&PathBuf>) -> Catalog {
    let result = match override_path {
        Some(path) => load_catalog(path),
        None => settings.catalog(),
    };
    result.unwrap_or_else(|e| {
        eprintln!("Failed to load catalog: {e}");
        std::process::exit(1);
    })
}

fn require_place<'a>(catalog: &'a Catalog, name: &str) -> &'a NamedPlace {
    catalog.get(name).unwrap_or_else(|| {
        eprintln!("Unknown place: {name}");
        std::process::exit(1);
    })
}

fn parse_utc(date: Option<&str>) -> UtcTime {
    let parsed = match date {
        Some(s) => s.parse::<UtcTime>(),
        None => UtcTime::now(),
    };
    parsed.unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn resolve_instant(time: &UtcTime, dut1_s: f64) -> ResolvedInstant {
    time.resolve(dut1_s).unwrap_or_else(|e| {
        eprintln!("Cannot resolve {time}: {e}");
        std::process::exit(1);
    })
}

fn build_engine(settings: &Settings, refraction: bool, dut1: Option<f64>) -> Engine {
    let mut config = settings.engine_config();
    if let Some(dut1) = dut1 {
        config.dut1_s = dut1;
    }
    if refraction && config.refraction.is_none() {
        config.refraction = Some(RefractionModel {
            pressure_mbar: settings.engine.pressure_mbar,
            temperature_c: settings.engine.temperature_c,
        });
    }
    Engine::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to create engine: {e}");
        std::process::exit(1);
    })
}

fn print_place(place: &NamedPlace) {
    println!("{} [{}]", place.name, place.slug);
    println!("  body:     {} (R = {} km)", place.body, place.radius_km());
    println!("  location: {}", place.point);
    if let Some(d) = place.diameter_km {
        println!("  diameter: {d} km");
    }
    if !place.description.is_empty() {
        println!("  {}", place.description);
    }
    for image in &place.images {
        println!("  image:    {image}");
    }
}

fn print_sky(body: Body, sky: &SkyArgs, settings: &Settings) {
    let location = GeoLocation::new(
        sky.lat.unwrap_or(settings.observer.latitude_deg),
        sky.lon.unwrap_or(settings.observer.longitude_deg),
        sky.height.unwrap_or(settings.observer.height_m),
    );
    let time = parse_utc(sky.date.as_deref());
    let engine = build_engine(settings, sky.refraction, sky.dut1);
    let observer = Observer::new(location, time);
    let pos = engine.apparent(body, &observer).unwrap_or_else(|e| {
        eprintln!("{body} position failed: {e}");
        std::process::exit(1);
    });

    let label = if sky.lat.is_none() && sky.lon.is_none() {
        format!(" ({})", settings.observer.name)
    } else {
        String::new()
    };
    println!(
        "{body} at {time} for {}{label}, {} m",
        GeoPoint::new(location.latitude_deg, location.longitude_deg),
        location.height_m
    );
    println!("  Altitude:   {:>10.4} deg", pos.horizontal.altitude_deg);
    println!("  Azimuth:    {:>10.4} deg", pos.horizontal.azimuth_deg);
    println!(
        "  RA/Dec:     {:>10.4} / {:.4} deg (topocentric)",
        pos.topocentric_equatorial.lon_deg, pos.topocentric_equatorial.lat_deg
    );
    println!("  Hour angle: {:>10.4} deg", pos.hour_angle_deg);
    println!("  Distance:   {:>14.3} km", pos.topocentric_equatorial.distance_km);
    if engine.config().refraction.is_some() {
        println!("  (altitude includes refraction)");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let settings = load_settings_or_exit(cli.config.as_ref());
    debug!("settings source: {:?}", settings.source);

    match cli.command {
        Commands::Places { body } => {
            let catalog = load_places(&settings, cli.catalog.as_ref());
            for place in catalog.iter().filter(|p| body.is_none_or(|b| p.body == b)) {
                println!("{:<22} {:<6} {}", place.name, place.body, place.point);
            }
        }

        Commands::Place { name } => {
            let catalog = load_places(&settings, cli.catalog.as_ref());
            print_place(require_place(&catalog, &name));
        }

        Commands::Distance {
            from,
            to,
            method,
            compare: both,
        } => {
            let catalog = load_places(&settings, cli.catalog.as_ref());
            let a = require_place(&catalog, &from);
            let b = require_place(&catalog, &to);
            if a.body != b.body {
                eprintln!("{} and {} are on different bodies", a.name, b.name);
                std::process::exit(1);
            }
            if both {
                let c = compare(&a.point, &b.point, a.radius_km());
                println!("{} -> {} on the {}", a.name, b.name, a.body);
                println!("  exact:  {:.3} km", c.exact_km);
                println!("  planar: {:.3} km", c.planar_km);
                println!(
                    "  delta:  {:+.3} km ({:.2}%)",
                    c.delta_km,
                    c.relative_error() * 100.0
                );
            } else {
                let method = method.unwrap_or(settings.distance_method);
                let km = catalog
                    .distance_between(&a.name, &b.name, method)
                    .unwrap_or_else(|e| {
                        eprintln!("{e}");
                        std::process::exit(1);
                    });
                println!("{} -> {}: {km:.3} km ({method})", a.name, b.name);
            }
        }

        Commands::DistanceCoords {
            lat1,
            lon1,
            lat2,
            lon2,
            body,
            radius,
            method,
        } => {
            let radius = radius.unwrap_or(body.radius_km());
            if !(radius.is_finite() && radius > 0.0) {
                eprintln!("Radius must be a positive number of km");
                std::process::exit(1);
            }
            let method = method.unwrap_or(settings.distance_method);
            let a = GeoPoint::new(lat1, lon1);
            let b = GeoPoint::new(lat2, lon2);
            let km = selene_geo::surface_distance(&a, &b, radius, method);
            println!("{a} -> {b}: {km:.3} km ({method}, R = {radius} km)");
        }

        Commands::Moon { sky } => print_sky(Body::Moon, &sky, &settings),

        Commands::Sun { sky } => print_sky(Body::Sun, &sky, &settings),

        Commands::Sidereal { date, lon, dut1 } => {
            let time = parse_utc(date.as_deref());
            let instant = resolve_instant(&time, dut1);
            let t = jd_to_centuries(instant.jd_tt);
            let (dpsi_arcsec, deps_arcsec) = nutation_arcsec(t);
            let eps = true_obliquity_deg(t, deps_arcsec).to_radians();
            let eqeq = equation_of_equinoxes_rad((dpsi_arcsec / 3600.0).to_radians(), eps);
            let gmst = gmst_rad(instant.jd_ut1, instant.jd_tt);
            let gast = gast_rad(instant.jd_ut1, instant.jd_tt, eqeq);
            let lst = local_sidereal_time_rad(gast, lon.to_radians());
            println!("Sidereal time at {time}");
            println!("  GMST: {:>10.6} deg ({})", gmst.to_degrees(), hms(gmst));
            println!("  GAST: {:>10.6} deg ({})", gast.to_degrees(), hms(gast));
            println!("  LAST: {:>10.6} deg ({}) at lon {lon}", lst.to_degrees(), hms(lst));
        }
    }
}

/// Angle in radians as hours, minutes and seconds of time.
fn hms(angle_rad: f64) -> String {
    let total_ms =
        (angle_rad.to_degrees().rem_euclid(360.0) / 15.0 * 3_600_000.0).round() as u64 % 86_400_000;
    let h = total_ms / 3_600_000;
    let m = total_ms / 60_000 % 60;
    let s = (total_ms % 60_000) as f64 / 1000.0;
    format!("{h:02}h{m:02}m{s:06.3}s")
}
