//! Integration tests for flock-output.

use flock_core::{Boundary, Bounds, FlockParams, SimConfig};
use flock_sim::{Sim, SimBuilder};

use crate::row::{TickSummaryRow, TrajectoryRow};

fn traj_row(agent_id: u32, tick: u64) -> TrajectoryRow {
    TrajectoryRow {
        tick,
        agent_id,
        x:         agent_id as f64 + 0.5,
        y:         1.25,
        heading_x: 1.0,
        heading_y: 0.0,
    }
}

fn summary_row(tick: u64) -> TickSummaryRow {
    TickSummaryRow { tick, agent_count: 3, mean_speed: 1.5, polarization: 0.25 }
}

fn small_sim(total_ticks: u64, interval: u64) -> Sim {
    SimBuilder::new(
        SimConfig { total_ticks, seed: 1, output_interval_ticks: interval },
        FlockParams::default(),
        Bounds::from_size(5.0, 5.0),
        Boundary::Toroidal,
        3,
    )
    .build()
    .unwrap()
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trajectories.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("trajectories.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trajectories.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "agent_id", "x", "y", "heading_x", "heading_y"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "agent_count", "mean_speed", "polarization"]);
    }

    #[test]
    fn csv_trajectory_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trajectories(&[traj_row(0, 5), traj_row(1, 5), traj_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trajectories.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "5"); // tick
        assert_eq!(&rows[0][1], "0"); // agent_id
        assert_eq!(&rows[1][2], "1.5"); // x
        assert_eq!(&rows[2][3], "1.25"); // y
        assert_eq!(&rows[2][4], "1"); // heading_x
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "3");
        assert_eq!(&rows[0][2], "1.5");
        assert_eq!(&rows[0][3], "0.25");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_csv() {
        use crate::observer::SimOutputObserver;

        let dir = tmp();
        let mut sim = small_sim(6, 2);
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("trajectories.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        // Ticks 0, 2, 4 × 3 agents.
        assert_eq!(rows.len(), 9);
        let ticks: Vec<&str> = rows.iter().map(|r| r.get(0).unwrap()).collect();
        assert_eq!(ticks, ["0", "0", "0", "2", "2", "2", "4", "4", "4"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr2.records().count(), 6);
    }
}

#[cfg(test)]
mod memory_tests {
    use super::*;
    use crate::{MemoryWriter, OutputWriter, SimOutputObserver};

    #[test]
    fn memory_writer_collects_rows() {
        let mut w = MemoryWriter::new();
        w.write_trajectories(&[traj_row(0, 0), traj_row(1, 0), traj_row(0, 1)]).unwrap();
        w.write_tick_summary(&summary_row(0)).unwrap();
        w.finish().unwrap();

        assert!(w.finished);
        assert_eq!(w.summaries, vec![summary_row(0)]);
        assert_eq!(w.trajectory_of(0), vec![traj_row(0, 0), traj_row(0, 1)]);
        assert_eq!(w.at_tick(0).len(), 2);
    }

    #[test]
    fn observer_records_pre_tick_positions() {
        let mut sim = small_sim(4, 1);
        let start: Vec<_> = sim.space.positions().to_vec();
        let mut obs = SimOutputObserver::new(MemoryWriter::new());
        sim.run(&mut obs).unwrap();

        let w = obs.into_writer();
        assert!(w.finished);
        assert_eq!(w.trajectories.len(), 12);
        assert_eq!(w.summaries.len(), 4);
        for (i, row) in w.at_tick(0).iter().enumerate() {
            assert_eq!(row.agent_id, i as u32);
            assert_eq!((row.x, row.y), (start[i].x, start[i].y));
        }
        for row in &w.trajectories {
            assert!((0.0..5.0).contains(&row.x) && (0.0..5.0).contains(&row.y));
        }
    }

    #[test]
    fn summaries_written_without_records() {
        let mut sim = small_sim(3, 0);
        let mut obs = SimOutputObserver::new(MemoryWriter::new());
        sim.run(&mut obs).unwrap();
        let w = obs.writer();
        assert!(w.trajectories.is_empty());
        let ticks: Vec<u64> = w.summaries.iter().map(|s| s.tick).collect();
        assert_eq!(ticks, [0, 1, 2]);
        assert!(w.summaries.iter().all(|s| s.agent_count == 3));
    }
}
