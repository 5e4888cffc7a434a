use blokk::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}
