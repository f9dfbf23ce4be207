use chrono::Utc;
use synodic::{moon_phase, planet_positions, sun_position, Moment};

fn main() {
    let now = Moment::from_utc(Utc::now());
    let jd = now.julian_date();

    println!("{jd}");
    println!("{}", moon_phase(now));
    println!("{}", sun_position(now));
    for position in planet_positions(now) {
        println!("{position}");
    }
}
