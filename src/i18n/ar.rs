use super::MessageKey;

pub(super) fn text(key: MessageKey) -> Option<&'static str> {
    let s = match key {
        MessageKey::AppTitle => "تسجيل",
        MessageKey::SelectGame => "اختر لعبة للبدء",
        MessageKey::Ok => "موافق",
        MessageKey::Error => "خطأ",
        MessageKey::GameOver => "انتهت اللعبة",
        MessageKey::Round => "جولة",
        MessageKey::RoundsHistory => "سجل الجولات",
        MessageKey::FinalResults => "النتائج النهائية",
        MessageKey::Leading => "🏆 متقدم",
        MessageKey::SelectPoints => "اختر النقاط",
        MessageKey::Win => "فوز",
        MessageKey::Lose => "خسارة",
        MessageKey::AddRound => "إضافة جولة",
        MessageKey::Reset => "إعادة تعيين",
        MessageKey::Nzol => "نزول",
        MessageKey::GameHistory => "سجل اللعبة",
        MessageKey::InvalidInput => "إدخال غير صحيح",
        MessageKey::EnterValidNumberForTeam => "يرجى إدخال رقم صحيح للفريق {team}",
        MessageKey::EnterAtLeastOneScore => "يرجى إدخال نقطة واحدة على الأقل",
        MessageKey::TeamWins => "{name} يفوز!",
        MessageKey::WinsWithScore => "{name} يفوز بـ {score} نقطة!",
        MessageKey::SelectWinnerAndHandType => "يرجى اختيار الفائز ونوع اليد",
        MessageKey::GameEndedAfterRounds => "انتهت اللعبة بعد 8 جولات!",
        MessageKey::HandRecorded => "تم تسجيل اليد",
        MessageKey::RoundWonHand => "الجولة {round}: {name} فاز بـ {handType}",
        MessageKey::GameNameKout => "كوت",
        MessageKey::GameNameBaloot => "بلوت",
        MessageKey::GameNameHand => "هند",
        MessageKey::HandTypeRegular => "عادي",
        MessageKey::HandTypeJokerColored => "جوكر/ لون",
        MessageKey::HandTypeOneJokerColored => "جوكر + لون",
        MessageKey::HandTypeTwoJokersColored => "جوكران + لون",
        MessageKey::HandTypeZat => "زات",
        MessageKey::HandTypeFinished => "خالصه",
        // Нет перевода – берётся английский.
        _ => return None,
    };
    Some(s)
}
