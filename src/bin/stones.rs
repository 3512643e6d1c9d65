//! Stones Binary
//!
//! Decide whether the player to move wins a pile of n stones.
//!
//! Options: --metodo <pura|memo_lru|trampolim|modulo|verdadeira>, --todos, --tabela <k>, -v

fn main() -> anyhow::Result<()> {
    stones::cli::CLI::run()
}
