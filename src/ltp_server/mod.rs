//! Line-oriented stdin/stdout protocol server (spec.md §4.8/§6), structurally
//! the same shape as the teacher's `LTPServer`: a persistent position plus a
//! linear undo history, one whitespace-tokenised command per line, replies
//! always closed with `ok`/`err`.

mod options;

use itertools::Itertools;
pub use options::EngineOptions;

use crate::prelude::*;

pub struct LTPServer {
    options: EngineOptions,
    position: Option<Position>,
    /// `to_move` isn't part of `Position` itself (`us`/`them` there are fixed
    /// to X/O, not "whoever's turn it is" — see `core::position`), so the
    /// server tracks it alongside the undo history.
    to_move: bool,
    history: Vec<(Position, bool)>,
    last_search: Option<(usize, SearchResult)>,
    dirty: bool,
}

impl LTPServer {
    pub fn new(options: EngineOptions) -> LTPServer {
        LTPServer {
            options,
            position: None,
            to_move: true,
            history: Vec::new(),
            last_search: None,
            dirty: true,
        }
    }

    /// Runs the protocol loop until `quit` or a stdin read failure.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let mut line = String::new();
            if std::io::stdin().read_line(&mut line)? == 0 {
                return Ok(());
            }

            let args: Vec<&str> = line.split_whitespace().collect();
            let cmd = *args.first().unwrap_or(&"");

            self.apply(cmd, &args[1..])?;
        }
    }

    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd {
            "" => Ok(()),
            "newgame" => self.new_game(args),
            "play" => self.play_move(args),
            "validmoves" => self.valid_moves(),
            "bestmove" => self.best_move(args),
            "pv" => self.principal_variation(),
            "score" => self.score(),
            "undo" => self.undo_move(),
            "info" => self.info(),
            "quit" => std::process::exit(0),
            _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result {
            Ok(_) => {
                log::debug!("command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            }
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err}");
                self.err(&err)
            }
        }
    }

    fn new_game(&mut self, args: &[&str]) -> Result<()> {
        let position = if args.is_empty() {
            Position::new()
        } else if args.len() == 3 {
            Position::from_wire(&args.join(" ")).ok_or_else(|| {
                EngineError::new(EngineErrorKind::ParseFailure, format!("malformed position: {}", args.join(" ")))
            })?
        } else {
            return Err(
                EngineError::new(EngineErrorKind::ParseFailure, "newgame takes zero or three wire words".to_owned())
                    .into(),
            );
        };

        self.position = Some(position);
        self.to_move = true;
        self.history.clear();
        self.last_search = None;
        self.dirty = true;

        println!("{}", position.to_wire());
        Ok(())
    }

    fn play_move(&mut self, args: &[&str]) -> Result<()> {
        let position = self.ensure_started()?;

        let token = args
            .first()
            .ok_or_else(|| EngineError::new(EngineErrorKind::ParseFailure, "no move provided".to_owned()))?;
        let m = parse_move_token(token)?;

        if !generate_moves(&position).contains(&m) {
            return Err(EngineError::new(EngineErrorKind::ParseFailure, format!("illegal move: {token}")).into());
        }

        self.history.push((position, self.to_move));
        let next = position.play_move(m, self.to_move);
        self.position = Some(next);
        self.to_move = !self.to_move;
        self.dirty = true;

        println!("{}", next.to_wire());
        Ok(())
    }

    fn valid_moves(&mut self) -> Result<()> {
        let position = self.ensure_started()?;
        let moves = generate_moves(&position);

        println!("{}", moves.len());
        println!("{}", moves.iter().map(|&m| format_move(m)).join("; "));
        Ok(())
    }

    fn best_move(&mut self, args: &[&str]) -> Result<()> {
        let position = self.ensure_started()?;

        if args.first() != Some(&"depth") {
            return Err(anyhow!("usage: bestmove depth <d>"));
        }
        let depth = args
            .get(1)
            .ok_or_else(|| EngineError::new(EngineErrorKind::InvalidDepth, "no depth given".to_owned()))?
            .parse::<i64>()
            .map_err(|_| EngineError::new(EngineErrorKind::InvalidDepth, "depth must be an integer".to_owned()))?;

        if depth <= 0 {
            return Err(EngineError::new(EngineErrorKind::InvalidDepth, format!("depth {depth} must be positive")).into());
        }
        if depth as usize > self.options.max_depth_ceiling {
            return Err(EngineError::new(
                EngineErrorKind::DepthTooLarge,
                format!("depth {depth} exceeds the configured ceiling of {}", self.options.max_depth_ceiling),
            )
            .into());
        }
        let depth = depth as usize;

        let result = alpha_beta_root_call(&position, self.to_move, depth);

        let pv_repr = result.pv.iter().map(|&m| format_move(m)).join(" ");
        println!("info depth {depth} {pv_repr} {}", format_score(result.score));

        self.last_search = Some((depth, result));
        self.dirty = false;
        Ok(())
    }

    fn principal_variation(&mut self) -> Result<()> {
        self.ensure_started()?;

        if self.dirty {
            return Err(anyhow!("board changed since previous engine move"));
        }
        let (_, result) = self.last_search.as_ref().ok_or_else(|| anyhow!("no search has run yet"))?;

        println!("{}", result.pv.iter().map(|&m| format_move(m)).join("; "));
        Ok(())
    }

    fn score(&mut self) -> Result<()> {
        let position = self.ensure_started()?;
        println!("{}", format_score(evaluate(&position, true)));
        Ok(())
    }

    fn undo_move(&mut self) -> Result<()> {
        self.ensure_started()?;

        let (position, to_move) = self.history.pop().ok_or_else(|| anyhow!("no moves to undo"))?;
        self.position = Some(position);
        self.to_move = to_move;
        self.dirty = true;

        println!("{}", position.to_wire());
        Ok(())
    }

    fn info(&self) -> Result<()> {
        println!("id {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        Ok(())
    }

    fn err(&self, err: &Error) -> Result<()> {
        match err.downcast_ref::<EngineError>() {
            Some(engine_err) => {
                let (category, sub_category) = engine_err.kind.wire_parts();
                println!("error {category} {sub_category} {}", engine_err.detail);
            }
            None => println!("error internal uncategorized {err}"),
        }
        self.ok()
    }

    fn ok(&self) -> Result<()> {
        println!("ok");
        Ok(())
    }

    /// Returns a copy of the current position — `Position` is cheap to copy,
    /// and doing so here lets every caller mutate other `self` fields
    /// (history, `to_move`, the search cache) without fighting the borrow
    /// checker over a reference into `self.position`.
    fn ensure_started(&self) -> Result<Position> {
        self.position.ok_or_else(|| anyhow!("no game in progress"))
    }
}

/// Accepts either a raw move index or zone-name notation.
fn parse_move_token(token: &str) -> Result<usize> {
    if let Ok(m) = token.parse::<usize>() {
        if m < 81 {
            return Ok(m);
        }
        return Err(EngineError::new(EngineErrorKind::ParseFailure, format!("move index {m} out of range")).into());
    }
    parse_move(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> LTPServer {
        LTPServer::new(EngineOptions { log_level: None, max_depth_ceiling: 40 })
    }

    #[test]
    fn a_fresh_server_rejects_commands_before_newgame() {
        let mut s = server();
        assert!(s.play_move(&["0"]).is_err());
        assert!(s.valid_moves().is_err());
        assert!(s.score().is_err());
    }

    #[test]
    fn newgame_with_no_args_starts_the_empty_position() {
        let mut s = server();
        assert!(s.new_game(&[]).is_ok());
        assert_eq!(s.position.unwrap(), Position::new());
    }

    #[test]
    fn newgame_rejects_a_malformed_wire_position() {
        let mut s = server();
        assert!(s.new_game(&["not", "a", "number"]).is_err());
    }

    #[test]
    fn play_then_undo_restores_the_prior_position_and_mover() {
        let mut s = server();
        s.new_game(&[]).unwrap();
        let before = s.position.unwrap();
        s.play_move(&["0"]).unwrap();
        assert!(s.position.unwrap() != before);
        assert_eq!(s.to_move, false);

        s.undo_move().unwrap();
        assert_eq!(s.position.unwrap(), before);
        assert_eq!(s.to_move, true);
    }

    #[test]
    fn play_rejects_a_move_outside_the_forced_zone() {
        let mut s = server();
        s.new_game(&[]).unwrap();
        s.play_move(&["40"]).unwrap(); // centre cell, forces zone 4
        assert!(s.play_move(&["0"]).is_err()); // zone 0 is not forced anymore
    }

    #[test]
    fn bestmove_rejects_a_nonpositive_depth() {
        let mut s = server();
        s.new_game(&[]).unwrap();
        assert!(s.best_move(&["depth", "0"]).is_err());
    }

    #[test]
    fn bestmove_rejects_a_depth_past_the_ceiling() {
        let mut s = server();
        s.new_game(&[]).unwrap();
        assert!(s.best_move(&["depth", "41"]).is_err());
    }

    #[test]
    fn pv_is_unavailable_until_a_search_has_run() {
        let mut s = server();
        s.new_game(&[]).unwrap();
        assert!(s.principal_variation().is_err());
        s.best_move(&["depth", "1"]).unwrap();
        assert!(s.principal_variation().is_ok());
    }

    #[test]
    fn pv_is_invalidated_once_the_board_changes() {
        let mut s = server();
        s.new_game(&[]).unwrap();
        s.best_move(&["depth", "1"]).unwrap();
        s.play_move(&["0"]).unwrap();
        assert!(s.principal_variation().is_err());
    }
}
