use super::*;
use std::io::Write;

/// Plain-text results, written to any sink once they are complete.
pub struct Report<W: Write> {
    sink: W,
}

impl<W: Write> Report<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Header, then one line per evolutionarily stable strategy.
    pub fn stability(
        &mut self,
        key: &Key,
        strategies: &[Strategy],
        verdicts: &[Verdict],
    ) -> Result<(), Fault> {
        writeln!(self.sink, "{}", key)?;
        for (i, strategy) in strategies
            .iter()
            .zip(verdicts)
            .enumerate()
            .filter(|(_, (_, verdict))| verdict.is_stable())
            .map(|(i, (strategy, _))| (i, strategy))
        {
            writeln!(self.sink, "Strategy {} ({}) was evolutionary stable", i, strategy)?;
        }
        writeln!(self.sink)?;
        Ok(())
    }

    /// Header, strategy legend, canonical payoff rows, then equilibria.
    pub fn payoff(
        &mut self,
        key: &Key,
        table: &Table,
        equilibria: &[Profile],
    ) -> Result<(), Fault> {
        writeln!(self.sink, "{}", key)?;
        for choice in 0..table.strategies() {
            writeln!(self.sink, "Strategy {}: {}", choice, table.strategy(choice))?;
        }
        for (profile, payoff) in table.rows() {
            writeln!(self.sink, "{}\t{}", Self::bracket(table.labels(profile)), payoff)?;
        }
        for profile in equilibria {
            writeln!(
                self.sink,
                "{}\t is a nash equilibrium",
                Self::bracket(table.labels(profile))
            )?;
        }
        writeln!(self.sink)?;
        Ok(())
    }

    /// Flushes and hands back the sink.
    pub fn finish(mut self) -> Result<W, Fault> {
        self.sink.flush()?;
        Ok(self.sink)
    }

    fn bracket(labels: Vec<String>) -> String {
        format!("[{}]", labels.join(", "))
    }
}
