use std::time::Instant;

use crate::simulation::density::{RadialDensityTable, WoodsSaxon};
use crate::simulation::engine::CollisionEngine;
use crate::simulation::error::{GlauberError, GlauberResult};
use crate::simulation::field::{deposit, DepositionKernel, GridSpec};
use crate::simulation::nucleus::Nucleus;
use crate::simulation::params::nucleon_radius_from_cross_section;
use crate::simulation::random::EventRng;

/// Time sampling and the pair scan for a range of nuclei
pub fn bench_collision() -> GlauberResult<()> {
    // O, Cu, Ag, Au, Pb, U
    let mass_numbers = [16, 63, 108, 197, 208, 238];
    let radius = nucleon_radius_from_cross_section(60.0);
    let engine = CollisionEngine::new(0.0);

    println!("A,sample_ms,collide_ms,n_coll");
    for a in mass_numbers {
        let mut rng = EventRng::from_seed(42);
        let table = RadialDensityTable::for_profile(&WoodsSaxon::for_mass_number(a));
        let mut nuc1 = Nucleus::new(a, radius);
        let mut nuc2 = Nucleus::new(a, radius);

        let t0 = Instant::now();
        nuc1.generate(&table, &mut rng)?;
        nuc2.generate(&table, &mut rng)?;
        let ms_sample = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        let n_coll = match engine.collide(&mut nuc1, &mut nuc2) {
            Ok(record) => record.collision_count(),
            Err(GlauberError::NoCollision { .. }) => 0,
            Err(e) => return Err(e),
        };
        let ms_collide = t1.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6},{:.6},{}", a, ms_sample, ms_collide, n_coll);
    }
    Ok(())
}

/// Time entropy deposition of one Pb+Pb event for several grid spacings
pub fn bench_deposition() -> GlauberResult<()> {
    let steps = [0.4, 0.2, 0.1, 0.05];
    let radius = nucleon_radius_from_cross_section(60.0);
    let kernel = DepositionKernel::new(0.7, 0.3)?;

    let mut rng = EventRng::from_seed(42);
    let table = RadialDensityTable::for_profile(&WoodsSaxon::for_mass_number(208));
    let mut nuc1 = Nucleus::new(208, radius);
    let mut nuc2 = Nucleus::new(208, radius);
    nuc1.generate(&table, &mut rng)?;
    nuc2.generate(&table, &mut rng)?;
    let engine = CollisionEngine::new(6.0);
    engine.position(&mut nuc1, &mut nuc2);
    let record = engine.collide(&mut nuc1, &mut nuc2)?;

    println!("step,cells,deposit_ms");
    for step in steps {
        let grid = GridSpec::new(-13.0, 13.0, step)?;
        let t0 = Instant::now();
        let field = deposit(grid, &kernel, &record);
        let ms = t0.elapsed().as_secs_f64() * 1000.0;
        println!("{},{},{:.6}", step, field.values().len(), ms);
    }
    Ok(())
}
