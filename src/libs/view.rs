use super::formatter::Dashboard;
use super::messages::Message;
use crate::msg_print;
use anyhow::Result;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    pub fn dashboard(dashboard: &Dashboard) -> Result<()> {
        println!("\n{} [{}]", dashboard.header.subtitle, dashboard.header.state);
        println!("{}", dashboard.header.meta);

        if let Some(kpis) = &dashboard.kpis {
            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BOX_CHARS);
            table.set_titles(row![
                Message::KpiActive,
                Message::KpiNextVisit,
                Message::KpiNextVisitTime,
                Message::KpiNextEnd
            ]);
            table.add_row(row![kpis.active_count, kpis.next_visit_people, kpis.next_visit_time, kpis.next_end]);
            table.printstd();
        }

        Self::active(dashboard)?;
        Self::timeline(dashboard)?;
        Self::errors(dashboard)?;

        Ok(())
    }

    fn active(dashboard: &Dashboard) -> Result<()> {
        println!("\n{} · {}", Message::ActiveHeader, dashboard.active_hint);
        if dashboard.active.is_empty() {
            msg_print!(Message::ActiveEmpty);
            return Ok(());
        }

        let mut table = Table::new();
        table.set_titles(row!["TITLE", "DETAILS", "LEFT"]);
        for item in &dashboard.active {
            table.add_row(row![item.title, item.meta, item.badge]);
        }
        table.printstd();

        Ok(())
    }

    fn timeline(dashboard: &Dashboard) -> Result<()> {
        println!("\n{}", Message::TimelineHeader);
        if dashboard.timeline.is_empty() {
            msg_print!(Message::TimelineEmpty);
            return Ok(());
        }

        let mut table = Table::new();
        table.set_titles(row!["TIME", "VISIT", "CHANNEL", "STATUS", "COLOR"]);
        for item in &dashboard.timeline {
            table.add_row(row![item.time, item.title, item.meta, item.badge, item.color]);
        }
        table.printstd();

        Ok(())
    }

    fn errors(dashboard: &Dashboard) -> Result<()> {
        if dashboard.errors.is_empty() {
            return Ok(());
        }

        println!("\n{}", Message::ErrorLogHeader);
        for line in &dashboard.errors {
            eprintln!("{}", line);
        }

        Ok(())
    }
}
