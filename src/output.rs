//! This module is in charge of outputting the generated events and a summary
//! of the run to the standard output and various files

use crate::{
    config::Configuration,
    event::Event,
    numeric::Float,
    particle::BasicParticle,
    properties::ParticleTable,
    Result,
};
use eyre::WrapErr;
use std::{
    fs::File,
    io::{BufWriter, Write},
    time::Duration,
};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Name of the file which generated events are written to
pub const EVENTS_FILE: &str = "gun.events";

/// Name of the file which run timings are written to
pub const TIMES_FILE: &str = "gun.times";

/// Average kinematics of the primary particles of a run
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Number of primary particles
    pub num_primaries: usize,

    /// Mean transverse momentum (MeV)
    pub mean_pt: Float,

    /// Mean pseudo-rapidity
    pub mean_eta: Float,

    /// Mean azimuthal angle
    pub mean_phi: Float,

    /// Mean total energy (MeV)
    pub mean_energy: Float,

    /// Mean kinetic energy (MeV)
    pub mean_kinetic_energy: Float,
}
//
impl RunSummary {
    /// Compute the summary of a set of events
    pub fn new(events: &[Event], table: &dyn ParticleTable) -> Result<Self> {
        let mut summary = Self::default();
        for primary in events.iter().flat_map(Event::primaries) {
            let particle = BasicParticle::from(primary);
            let triplet = particle.pseudo_lorentz_triplet();
            summary.num_primaries += 1;
            summary.mean_pt += triplet.pt;
            summary.mean_eta += triplet.eta;
            summary.mean_phi += triplet.phi;
            summary.mean_energy += particle.total_energy(table)?;
            summary.mean_kinetic_energy += particle.kinetic_energy(table)?;
        }

        // Turn the sums into averages
        if summary.num_primaries > 0 {
            let norm = 1. / (summary.num_primaries as Float);
            summary.mean_pt *= norm;
            summary.mean_eta *= norm;
            summary.mean_phi *= norm;
            summary.mean_energy *= norm;
            summary.mean_kinetic_energy *= norm;
        }
        Ok(summary)
    }

    /// Display the summary
    pub fn print(&self) {
        println!("Primary particles         : {}", self.num_primaries);
        println!("Mean pT             (MeV) : {}", self.mean_pt);
        println!("Mean eta                  : {}", self.mean_eta);
        println!("Mean phi                  : {}", self.mean_phi);
        println!("Mean energy         (MeV) : {}", self.mean_energy);
        println!("Mean kinetic energy (MeV) : {}", self.mean_kinetic_energy);
    }
}

/// Output the generation results to the console and to disk
pub fn dump_results(
    cfg: &Configuration,
    events: &[Event],
    table: &dyn ParticleTable,
    elapsed_time: Duration,
) -> Result<()> {
    // Print out a summary of the run on stdout
    let summary = RunSummary::new(events, table)?;
    summary.print();
    let elapsed_secs = elapsed_time.as_secs_f64();
    println!("Elapsed time        (s)   : {}", elapsed_secs);

    // Compute a timestamp of when the run ended
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .wrap_err("Failed to format the timestamp")?;

    // Write execution timings to a file
    {
        let mut tim_file = create(TIMES_FILE)?;
        writeln!(tim_file, "{}", timestamp)?;
        writeln!(tim_file, "Elapsed time (s)           : {}", elapsed_secs)?;
        let secs_per_ev = elapsed_secs / (cfg.num_events as Float);
        writeln!(tim_file, "Elapsed time per event (s) : {}", secs_per_ev)?;
        tim_file.flush()?;
    }

    // Write the events themselves
    {
        let mut ev_file = create(EVENTS_FILE)?;
        write_events(&mut ev_file, &timestamp, events)?;
        ev_file.flush()?;
    }

    // ...and we're done
    Ok(())
}

/// Create an output file, with buffering
fn create(file_name: &str) -> Result<BufWriter<File>> {
    let file = File::create(file_name)
        .wrap_err_with(|| format!("Could not create output file {}", file_name))?;
    Ok(BufWriter::new(file))
}

/// Write down events, after a header identifying the run
pub fn write_events(writer: &mut impl Write, timestamp: &str, events: &[Event]) -> Result<()> {
    writeln!(writer, "# {}", timestamp)?;
    writeln!(writer, "# EVENT\tnumber\tnum_vertices")?;
    writeln!(writer, "# VERTEX\tt\tx\ty\tz")?;
    writeln!(writer, "# PRIMARY\ttype\tpx\tpy\tpz\tpt\teta\tphi")?;
    for event in events {
        write!(writer, "{}", event)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        particle::Particle,
        properties::{ParticleId, PdgTable},
    };
    use approx::assert_relative_eq;

    fn event(number: usize, id: i32, momentum: (Float, Float, Float)) -> Event {
        let mut particle = Particle::new(ParticleId::new(id));
        particle.set_momentum_xyz(momentum.0, momentum.1, momentum.2);
        let mut event = Event::new(number);
        event.add_particle(particle);
        event
    }

    #[test]
    fn summary_averages_primaries() {
        let events = [event(0, 22, (0., 3., -4.)), event(1, 22, (0., 0., -1.))];
        let summary = RunSummary::new(&events, &PdgTable).unwrap();
        assert_eq!(summary.num_primaries, 2);
        assert_relative_eq!(summary.mean_pt, 3., epsilon = 1e-12);
        assert_eq!(summary.mean_eta, 0.);
        assert_relative_eq!(summary.mean_phi, 0.5 * 3f64.atan2(4.), epsilon = 1e-12);
        assert_relative_eq!(summary.mean_energy, 3., epsilon = 1e-12);
        assert_relative_eq!(summary.mean_kinetic_energy, 3., epsilon = 1e-12);
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        let summary = RunSummary::new(&[], &PdgTable).unwrap();
        assert_eq!(summary, RunSummary::default());
    }

    #[test]
    fn summary_reports_unknown_particles() {
        let events = [event(0, 777_777, (1., 1., 1.))];
        assert!(RunSummary::new(&events, &PdgTable).is_err());
    }

    #[test]
    fn events_are_written_after_header() {
        let events = [event(3, 13, (0., 0., -2.))];
        let mut buffer = Vec::new();
        write_events(&mut buffer, "sometime", &events).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "# sometime");
        assert_eq!(lines.len(), 4 + 3);
        assert_eq!(lines[4], "EVENT\t3\t1");
        assert!(lines[6].starts_with("PRIMARY\t13\t"));
    }
}
