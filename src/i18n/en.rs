use super::MessageKey;

pub(super) fn text(key: MessageKey) -> &'static str {
    match key {
        MessageKey::AppTitle => "Tsjel",
        MessageKey::SelectGame => "Select a game to start",
        MessageKey::Ok => "OK",
        MessageKey::Error => "Error",
        MessageKey::GameOver => "Game Over",
        MessageKey::Round => "Round",
        MessageKey::RoundsHistory => "Rounds History",
        MessageKey::FinalResults => "Final Results",
        MessageKey::Leading => "🏆 Leading",
        MessageKey::SelectPoints => "Select Points",
        MessageKey::Win => "Win",
        MessageKey::Lose => "Lose",
        MessageKey::AddRound => "Add Round",
        MessageKey::Reset => "Reset",
        MessageKey::Nzol => "Nzol",
        MessageKey::GameSaved => "Game saved!",
        MessageKey::LoginToSaveGames => "Login to save your games",
        MessageKey::NoGamesYet => "No games yet. Start playing!",
        MessageKey::PlayingAsGuest => "Playing as guest",
        MessageKey::SignedInAs => "Signed in as:",
        MessageKey::GameHistory => "Game History",
        MessageKey::InvalidInput => "Invalid Input",
        MessageKey::EnterValidNumberForTeam => "Please enter a valid number for Team {team}",
        MessageKey::EnterAtLeastOneScore => "Please enter at least one score",
        MessageKey::TeamWins => "{name} Wins!",
        MessageKey::WinsWithScore => "{name} wins with {score} points!",
        MessageKey::SelectWinnerAndHandType => "Please select a winner and hand type",
        MessageKey::GameEndedAfterRounds => "The game has ended after 8 rounds!",
        MessageKey::HandRecorded => "Hand Recorded",
        MessageKey::RoundWonHand => "Round {round}: {name} won a {handType}",
        MessageKey::SelectPointsAndTeam => "Please select points and a team",
        MessageKey::InvalidPointValue => "{points} is not a valid point value",
        MessageKey::InvalidPlayer => "There is no Player {player}",
        MessageKey::GameNotFinished => "The game is not finished yet",
        MessageKey::NoWinner => "The scores are tied, there is no winner yet",
        MessageKey::NotSupportedForMode => "This action is not available for this game",
        MessageKey::UnknownGame => "Unknown game: {game}",
        MessageKey::InterstitialOffered => "Thanks for playing!",
        MessageKey::GameNameKout => "Kout",
        MessageKey::GameNameBaloot => "Baloot",
        MessageKey::GameNameHand => "Hand",
        MessageKey::HandTypeRegular => "Regular",
        MessageKey::HandTypeJokerColored => "Joker/Colored",
        MessageKey::HandTypeOneJokerColored => "1 Joker + Colored",
        MessageKey::HandTypeTwoJokersColored => "2 Jokers + Colored",
        MessageKey::HandTypeZat => "Zat",
        MessageKey::HandTypeFinished => "Finished",
    }
}
