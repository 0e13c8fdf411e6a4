use colored::Colorize;

use crate::{
    BinaryTree,
    Sample,
    TreeModel,
    Pruner,
    Metric,
    evaluate,
};
use crate::pruner::check_features;
use crate::constants::{WIDTH, PREC_WIDTH, FULL_WIDTH, STAT_WIDTH};

use std::fs::File;
use std::io::{self, prelude::*};
use std::path::Path;
use std::time::Instant;


const HEADER: &str = "Pruner,NodesBefore,NodesAfter,LeavesBefore,LeavesAfter,\
                      TrainError,PruneErrorBefore,PruneErrorAfter,TestError,Time\n";


/// Struct `PruneLogger` runs each pruner on its own copy of a model
/// and logs tree size, train/prune/test error, and running time.
/// Construct it with [`PruneLoggerBuilder`](super::PruneLoggerBuilder).
pub struct PruneLogger<'a> {
    pub(super) model: &'a TreeModel,
    pub(super) pruners: Vec<Box<dyn Pruner + 'a>>,
    pub(super) metric: Box<dyn Metric + Sync + 'a>,
}


impl PruneLogger<'_> {
    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>STAT_WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "LEAVES".bold().blue(),
            "TRAIN".bold().green(),
            "PRUNE".bold().yellow(),
            "".bold().cyan(),
        );
        println!(
            "      {:>STAT_WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "PRUNER".bold().red(),
            "AFTER".bold().blue(),
            "ERROR".bold().green(),
            "ERROR".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self, tree: &BinaryTree) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "# of nodes".bold(),
            tree.n_live_nodes().to_string().bold().green(),
            "# of leaves".bold(),
            tree.n_leaves().to_string().bold().green(),
            "Metric".bold(),
            self.metric.name().bold().green(),
        );

        for pruner in self.pruners.iter() {
            println!(
                "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
                "Pruner".bold(),
                pruner.name().bold().green(),
            );
            if let Some(info) = pruner.info() {
                let line = info.into_iter()
                    .map(|(key, val)| {
                        format!(
                            "    + {:<STAT_WIDTH$}\t{:>width$}",
                            key,
                            val.bold().yellow(),
                            width = STAT_WIDTH - 8
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                println!("{line}");
            }
        }
        println!("{:=^FULL_WIDTH$}\n", "".bold());
    }


    /// Error of `tree` on `sample`, if there is one.
    #[inline]
    fn error(&self, tree: &BinaryTree, sample: Option<&Sample>)
        -> Option<f64>
    {
        sample.map(|sample| evaluate(tree, sample, &*self.metric))
    }


    /// Run every pruner on a copy of the model
    /// and write one CSV line per pruner to `filename`.
    /// Returns the pruned trees in the order the pruners were given.
    ///
    /// A pruning error aborts the run
    /// and is returned as [`io::ErrorKind::Other`].
    pub fn run<P: AsRef<Path>>(&mut self, filename: P)
        -> io::Result<Vec<BinaryTree>>
    {
        let tree = self.model.trained_tree()
            .ok_or_else(|| io::Error::other(crate::PruneError::NoModel))?;

        // Open file
        let mut file = File::create(filename)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        self.print_stats(tree);
        self.print_log_header();

        let train = self.model.training_set();
        let prune = self.model.prune_set();
        let test = self.model.test_set();
        for sample in [train, prune, test].into_iter().flatten() {
            check_features(tree, sample).map_err(io::Error::other)?;
        }

        let nodes_before = tree.n_live_nodes();
        let leaves_before = tree.n_leaves();
        let prune_before = self.error(tree, prune);

        let mut trees = Vec::with_capacity(self.pruners.len());
        for pruner in self.pruners.iter() {
            let mut model = self.model.clone();

            // Start measuring time
            let now = Instant::now();
            pruner.prune(&mut model)
                .map_err(io::Error::other)?;
            // Stop measuring and convert `Duration` to Milliseconds.
            let time = now.elapsed().as_millis();

            let pruned = model.into_tree()
                .ok_or_else(|| io::Error::other(crate::PruneError::NoModel))?;

            let train_err = self.error(&pruned, train);
            let prune_after = self.error(&pruned, prune);
            let test_err = self.error(&pruned, test);

            // Write the results to `file`.
            let line = format!(
                "{},{},{},{},{},{},{},{},{},{}\n",
                pruner.name(),
                nodes_before,
                pruned.n_live_nodes(),
                leaves_before,
                pruned.n_leaves(),
                cell(train_err),
                cell(prune_before),
                cell(prune_after),
                cell(test_err),
                time,
            );
            file.write_all(line.as_bytes())?;

            println!(
                "{} {}\t{}\t{}\t{}\t{}",
                "[LOG]".bold().magenta(),
                format!("{:>STAT_WIDTH$}", pruner.name()).red(),
                format!("{:>WIDTH$}", pruned.n_leaves()).blue(),
                format!("{:>WIDTH$.PREC_WIDTH$}", train_err.unwrap_or(f64::NAN)).green(),
                format!("{:>WIDTH$.PREC_WIDTH$}", prune_after.unwrap_or(f64::NAN)).yellow(),
                time_format(time).bold().cyan(),
            );

            trees.push(pruned);
        }
        Ok(trees)
    }
}


/// A missing sample leaves its CSV cell empty.
#[inline]
fn cell(error: Option<f64>) -> String {
    error.map_or_else(String::new, |err| err.to_string())
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}
