//! Sentence-level parser: a prologue that recognises `$` and the sentence
//! tag, one sub-machine per sentence, and the delivery/error tail states.
//!
//! Sub-machines alternate between odd "field" states and even "separator"
//! states. A field state decodes the expected token and advances by one; an
//! empty field (a bare `,`) advances by two, leaving the record field at its
//! all-ones sentinel. Legally absent trailing fields are skipped when the
//! `*HH` token arrives early. The final state compares the wire checksum
//! against the lexer's rolling XOR; only a match reaches delivery.
use crate::protocol::nmea::lexer::{Lexer, Token};
use crate::protocol::nmea::messages::*;
use crate::protocol::nmea::MessageId;
use crate::protocol::traits::byte_source::ByteSource;

/// Active sub-machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Machine {
    Prologue,
    #[cfg(feature = "gga")]
    Gga,
    #[cfg(feature = "gll")]
    Gll,
    #[cfg(feature = "gsa")]
    Gsa,
    #[cfg(feature = "gsv")]
    Gsv,
    #[cfg(feature = "mss")]
    Mss,
    #[cfg(feature = "rmc")]
    Rmc,
    #[cfg(feature = "vtg")]
    Vtg,
    #[cfg(feature = "zda")]
    Zda,
    #[cfg(feature = "psrf150")]
    Psrf150,
    #[cfg(feature = "psrf151")]
    Psrf151,
    #[cfg(feature = "psrf152")]
    Psrf152,
    #[cfg(feature = "psrf154")]
    Psrf154,
    WaitNl,
    Error,
}

/// Streaming NMEA sentence parser. Owns its lexer, staging buffer, and the
/// record under construction; nothing is shared between instances.
pub struct Parser<S> {
    lexer: Lexer<S>,
    machine: Machine,
    pos: u16,
    message: Option<Message>,
}

impl<S: ByteSource> Parser<S> {
    pub fn new(stream: S) -> Self {
        Self {
            lexer: Lexer::new(stream),
            machine: Machine::Prologue,
            pos: 0,
            message: None,
        }
    }

    /// Consume every token the source can currently supply, invoking
    /// `on_message` for each sentence that completes with a good checksum.
    pub fn parse(&mut self, mut on_message: impl FnMut(&Message)) {
        while self.step(&mut on_message) {}
    }

    /// Consume exactly one token. Returns false when the byte source has
    /// nothing available; all state is kept for the next call.
    pub fn step(&mut self, mut on_message: impl FnMut(&Message)) -> bool {
        let Some(token) = self.lexer.next_token() else {
            return false;
        };
        self.dispatch(token, &mut on_message);
        true
    }

    fn dispatch(&mut self, token: Token, on_message: &mut impl FnMut(&Message)) {
        match self.machine {
            Machine::Prologue => self.prologue(token),
            #[cfg(feature = "gga")]
            Machine::Gga => {
                if let Some(Message::Gga(mut gga)) = self.message {
                    self.drive_gga(&mut gga, token);
                    self.message = Some(Message::Gga(gga));
                }
            }
            #[cfg(feature = "gll")]
            Machine::Gll => {
                if let Some(Message::Gll(mut gll)) = self.message {
                    self.drive_gll(&mut gll, token);
                    self.message = Some(Message::Gll(gll));
                }
            }
            #[cfg(feature = "gsa")]
            Machine::Gsa => {
                if let Some(Message::Gsa(mut gsa)) = self.message {
                    self.drive_gsa(&mut gsa, token);
                    self.message = Some(Message::Gsa(gsa));
                }
            }
            #[cfg(feature = "gsv")]
            Machine::Gsv => {
                if let Some(Message::Gsv(mut gsv)) = self.message {
                    self.drive_gsv(&mut gsv, token);
                    self.message = Some(Message::Gsv(gsv));
                }
            }
            #[cfg(feature = "mss")]
            Machine::Mss => {
                if let Some(Message::Mss(mut mss)) = self.message {
                    self.drive_mss(&mut mss, token);
                    self.message = Some(Message::Mss(mss));
                }
            }
            #[cfg(feature = "rmc")]
            Machine::Rmc => {
                if let Some(Message::Rmc(mut rmc)) = self.message {
                    self.drive_rmc(&mut rmc, token);
                    self.message = Some(Message::Rmc(rmc));
                }
            }
            #[cfg(feature = "vtg")]
            Machine::Vtg => {
                if let Some(Message::Vtg(mut vtg)) = self.message {
                    self.drive_vtg(&mut vtg, token);
                    self.message = Some(Message::Vtg(vtg));
                }
            }
            #[cfg(feature = "zda")]
            Machine::Zda => {
                if let Some(Message::Zda(mut zda)) = self.message {
                    self.drive_zda(&mut zda, token);
                    self.message = Some(Message::Zda(zda));
                }
            }
            #[cfg(feature = "psrf150")]
            Machine::Psrf150 => {
                if let Some(Message::OkToSend(mut body)) = self.message {
                    self.drive_psrf150(&mut body, token);
                    self.message = Some(Message::OkToSend(body));
                }
            }
            #[cfg(feature = "psrf151")]
            Machine::Psrf151 => {
                if let Some(Message::GpsDataEem(mut body)) = self.message {
                    self.drive_psrf151(&mut body, token);
                    self.message = Some(Message::GpsDataEem(body));
                }
            }
            #[cfg(feature = "psrf152")]
            Machine::Psrf152 => {
                if let Some(Message::EeIntegrity(mut body)) = self.message {
                    self.drive_psrf152(&mut body, token);
                    self.message = Some(Message::EeIntegrity(body));
                }
            }
            #[cfg(feature = "psrf154")]
            Machine::Psrf154 => {
                if let Some(Message::EeAck(mut body)) = self.message {
                    self.drive_psrf154(&mut body, token);
                    self.message = Some(Message::EeAck(body));
                }
            }
            Machine::WaitNl => self.wait_nl(token, on_message),
            Machine::Error => self.drain(token),
        }
    }

    //==================================================================================PROLOGUE_AND_TAILS

    fn prologue(&mut self, token: Token) {
        match self.pos {
            0 => match token {
                Token::Char(b'$') => {
                    self.pos = 1;
                    self.lexer.clear_checksum();
                }
                _ => self.fail(token),
            },
            _ => match token {
                Token::Tag(id) => match Self::machine_for(id) {
                    Some((machine, message)) => {
                        self.machine = machine;
                        self.pos = 0;
                        self.message = Some(message);
                    }
                    None => self.fail(token),
                },
                _ => self.fail(token),
            },
        }
    }

    /// Sub-machine and zeroed record for a recognised tag. Tags without a
    /// record (disabled sentences, PSRF140/155) yield `None` and the
    /// sentence is discarded.
    fn machine_for(id: MessageId) -> Option<(Machine, Message)> {
        match id {
            #[cfg(feature = "gga")]
            MessageId::Gga => Some((Machine::Gga, Message::Gga(Gga::unset()))),
            #[cfg(feature = "gll")]
            MessageId::Gll => Some((Machine::Gll, Message::Gll(Gll::unset()))),
            #[cfg(feature = "gsa")]
            MessageId::Gsa => Some((Machine::Gsa, Message::Gsa(Gsa::unset()))),
            #[cfg(feature = "gsv")]
            MessageId::Gsv => Some((Machine::Gsv, Message::Gsv(Gsv::unset()))),
            #[cfg(feature = "mss")]
            MessageId::Mss => Some((Machine::Mss, Message::Mss(Mss::unset()))),
            #[cfg(feature = "rmc")]
            MessageId::Rmc => Some((Machine::Rmc, Message::Rmc(Rmc::unset()))),
            #[cfg(feature = "vtg")]
            MessageId::Vtg => Some((Machine::Vtg, Message::Vtg(Vtg::unset()))),
            #[cfg(feature = "zda")]
            MessageId::Zda => Some((Machine::Zda, Message::Zda(Zda::unset()))),
            #[cfg(feature = "psrf150")]
            MessageId::Psrf150 => Some((Machine::Psrf150, Message::OkToSend(OkToSend::unset()))),
            #[cfg(feature = "psrf151")]
            MessageId::Psrf151 => Some((Machine::Psrf151, Message::GpsDataEem(GpsDataEem::unset()))),
            #[cfg(feature = "psrf152")]
            MessageId::Psrf152 => {
                Some((Machine::Psrf152, Message::EeIntegrity(EeIntegrity::unset())))
            }
            #[cfg(feature = "psrf154")]
            MessageId::Psrf154 => Some((Machine::Psrf154, Message::EeAck(EeAck::unset()))),
            _ => None,
        }
    }

    fn wait_nl(&mut self, token: Token, on_message: &mut impl FnMut(&Message)) {
        if token == Token::Nl {
            if let Some(message) = &self.message {
                #[cfg(feature = "defmt")]
                defmt::trace!("nmea: delivering message id {}", message.id() as u8);
                on_message(message);
            }
            self.machine = Machine::Prologue;
            self.pos = 0;
        } else {
            self.fail(token);
        }
    }

    /// Error state: swallow tokens until the next newline, then return to
    /// the prologue. Resynchronisation at line boundaries is automatic.
    fn drain(&mut self, token: Token) {
        if token == Token::Nl {
            self.machine = Machine::Prologue;
            self.pos = 0;
        }
    }

    fn fail(&mut self, token: Token) {
        #[cfg(feature = "defmt")]
        defmt::debug!("nmea: sentence discarded, resynchronising at newline");
        self.machine = Machine::Error;
        self.pos = 0;
        if token == Token::Nl {
            self.machine = Machine::Prologue;
        }
    }

    /// Even-state handler: consume the `,` between fields.
    fn separator(&mut self, token: Token) {
        if token == Token::Char(b',') {
            self.pos += 1;
        } else {
            self.fail(token);
        }
    }

    /// Final state: compare the wire checksum against the recomputed XOR.
    fn close(&mut self, token: Token) {
        if token == Token::Checksum {
            if self.lexer.buffer().decode_checksum() == self.lexer.checksum() {
                self.machine = Machine::WaitNl;
                self.pos = 0;
            } else {
                #[cfg(feature = "defmt")]
                defmt::debug!("nmea: checksum mismatch");
                self.machine = Machine::Error;
                self.pos = 0;
            }
        } else {
            self.fail(token);
        }
    }

    //==================================================================================SUB_MACHINES

    #[cfg(feature = "gga")]
    fn drive_gga(&mut self, gga: &mut Gga, token: Token) {
        loop {
            match self.pos {
                // UTC time
                1 => match token {
                    Token::FltNum => {
                        gga.utc_time = self.lexer.buffer().decode_utc_time();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                // Latitude
                3 => match token {
                    Token::FltNum => {
                        gga.latitude = self.lexer.buffer().decode_decimal_4_4();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                5 => match token {
                    Token::Char(c @ (b'N' | b'S')) => {
                        gga.ns_indicator = c;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                // Longitude
                7 => match token {
                    Token::FltNum => {
                        gga.longitude = self.lexer.buffer().decode_decimal_4_4();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                9 => match token {
                    Token::Char(c @ (b'E' | b'W')) => {
                        gga.ew_indicator = c;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                11 => match token {
                    Token::Num => {
                        gga.position_fix_indicator = self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                13 => match token {
                    Token::Num => {
                        gga.satellites_used = self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                15 => match token {
                    Token::FltNum => {
                        gga.hdop = self.lexer.buffer().decode_decimal_2_2();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                17 => match token {
                    Token::FltNum => {
                        gga.msl_altitude = self.lexer.buffer().decode_decimal_2_2();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                19 => match token {
                    Token::Char(c) if c.is_ascii_alphabetic() => {
                        gga.units = c;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                21 => match token {
                    Token::FltNum => {
                        gga.geoid_separation = self.lexer.buffer().decode_decimal_2_2();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                23 => match token {
                    Token::Char(c) if c.is_ascii_alphabetic() => {
                        gga.units2 = c;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                // Age of differential corrections; a decimal on the wire,
                // stored whole-seconds only.
                25 => match token {
                    Token::FltNum => {
                        gga.age_of_diff_corr = self.lexer.buffer().decode_i16() as u16;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                27 => {
                    if token == Token::Checksum {
                        self.pos += 1;
                        continue;
                    }
                    match token {
                        Token::Num => {
                            gga.diff_ref_station_id = self.lexer.buffer().decode_i16() as u16;
                            self.pos += 1;
                        }
                        _ => self.fail(token),
                    }
                }
                28 => self.close(token),
                _ => self.separator(token),
            }
            return;
        }
    }

    #[cfg(feature = "gll")]
    fn drive_gll(&mut self, gll: &mut Gll, token: Token) {
        loop {
            match self.pos {
                1 => match token {
                    Token::FltNum => {
                        gll.latitude = self.lexer.buffer().decode_decimal_4_4();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                3 => match token {
                    Token::Char(c @ (b'N' | b'S')) => {
                        gll.ns_indicator = c;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                5 => match token {
                    Token::FltNum => {
                        gll.longitude = self.lexer.buffer().decode_decimal_4_4();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                7 => match token {
                    Token::Char(c @ (b'E' | b'W')) => {
                        gll.ew_indicator = c;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                9 => match token {
                    Token::FltNum => {
                        gll.utc_time = self.lexer.buffer().decode_utc_time();
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                11 => match token {
                    Token::Char(c @ (b'A' | b'V')) => {
                        gll.status = c;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                13 => {
                    if token == Token::Checksum {
                        self.pos += 1;
                        continue;
                    }
                    match token {
                        Token::Char(c) if c.is_ascii_alphabetic() => {
                            gll.mode = c;
                            self.pos += 1;
                        }
                        _ => self.fail(token),
                    }
                }
                14 => self.close(token),
                _ => self.separator(token),
            }
            return;
        }
    }

    #[cfg(feature = "gsa")]
    fn drive_gsa(&mut self, gsa: &mut Gsa, token: Token) {
        loop {
            match self.pos {
                1 => match token {
                    Token::Char(c @ (b'A' | b'M')) => {
                        gsa.mode1 = c;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                3 => match token {
                    Token::Num => {
                        gsa.mode2 = self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                // Satellites used, channels 1-12
                pos @ (5 | 7 | 9 | 11 | 13 | 15 | 17 | 19 | 21 | 23 | 25 | 27) => match token {
                    Token::Num => {
                        gsa.satellite_used[((pos - 5) / 2) as usize] =
                            self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                29 => match token {
                    Token::FltNum => {
                        gsa.pdop = self.lexer.buffer().decode_decimal_2_2();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                31 => match token {
                    Token::FltNum => {
                        gsa.hdop = self.lexer.buffer().decode_decimal_2_2();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                33 => {
                    if token == Token::Checksum {
                        self.pos += 1;
                        continue;
                    }
                    match token {
                        Token::FltNum => {
                            gsa.vdop = self.lexer.buffer().decode_decimal_2_2();
                            self.pos += 1;
                        }
                        _ => self.fail(token),
                    }
                }
                34 => self.close(token),
                _ => self.separator(token),
            }
            return;
        }
    }

    #[cfg(feature = "gsv")]
    fn drive_gsv(&mut self, gsv: &mut Gsv, token: Token) {
        loop {
            match self.pos {
                1 => match token {
                    Token::Num => {
                        gsv.number_of_messages = self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                3 => match token {
                    Token::Num => {
                        gsv.message_number = self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                5 => match token {
                    Token::Num => {
                        gsv.satellites_in_view = self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                pos @ (7 | 15 | 23 | 31) => match token {
                    Token::Num => {
                        gsv.satellites[((pos - 7) / 8) as usize].satellite_id =
                            self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                pos @ (9 | 17 | 25 | 33) => match token {
                    Token::Num => {
                        gsv.satellites[((pos - 9) / 8) as usize].elevation =
                            self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                pos @ (11 | 19 | 27 | 35) => match token {
                    Token::Num => {
                        gsv.satellites[((pos - 11) / 8) as usize].azimuth =
                            self.lexer.buffer().decode_i16();
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                // SNR closes a satellite group; once the group count covers
                // `satellites_in_view` the sentence jumps to the checksum.
                pos @ (13 | 21 | 29 | 37) => {
                    if token == Token::Checksum {
                        self.pos += 1;
                        continue;
                    }
                    match token {
                        Token::Num => {
                            let slot = ((pos - 13) / 8) as usize;
                            gsv.satellites[slot].snr = self.lexer.buffer().decode_i16() as i8;
                            let counted = 4 * (gsv.message_number as i16 - 1) + slot as i16 + 1;
                            if counted >= gsv.satellites_in_view as i16 {
                                self.pos = 38;
                            } else {
                                self.pos += 1;
                            }
                        }
                        Token::Char(b',') => self.pos += 2,
                        _ => self.fail(token),
                    }
                }
                38 => self.close(token),
                _ => self.separator(token),
            }
            return;
        }
    }

    #[cfg(feature = "mss")]
    fn drive_mss(&mut self, mss: &mut Mss, token: Token) {
        loop {
            match self.pos {
                1 => match token {
                    Token::Num => {
                        mss.signal_strength = self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                3 => match token {
                    Token::Num => {
                        mss.signal_to_noise_ratio = self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                5 => match token {
                    Token::FltNum => {
                        mss.beacon_frequency = self.lexer.buffer().decode_decimal_4_2();
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                7 => match token {
                    Token::Num => {
                        mss.beacon_bit_rate = self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                8 => {
                    if token == Token::Checksum {
                        self.pos += 2;
                        continue;
                    }
                    self.separator(token);
                }
                9 => {
                    if token == Token::Checksum {
                        self.pos += 1;
                        continue;
                    }
                    match token {
                        Token::Num => {
                            mss.channel_number = self.lexer.buffer().decode_i16() as i8;
                            self.pos += 1;
                        }
                        _ => self.fail(token),
                    }
                }
                10 => self.close(token),
                _ => self.separator(token),
            }
            return;
        }
    }

    #[cfg(feature = "rmc")]
    fn drive_rmc(&mut self, rmc: &mut Rmc, token: Token) {
        loop {
            match self.pos {
                1 => match token {
                    Token::FltNum => {
                        rmc.utc_time = self.lexer.buffer().decode_utc_time();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                3 => match token {
                    Token::Char(c @ (b'A' | b'V')) => {
                        rmc.status = c;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                5 => match token {
                    Token::FltNum => {
                        rmc.latitude = self.lexer.buffer().decode_decimal_4_4();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                7 => match token {
                    Token::Char(c @ (b'N' | b'S')) => {
                        rmc.ns_indicator = c;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                9 => match token {
                    Token::FltNum => {
                        rmc.longitude = self.lexer.buffer().decode_decimal_4_4();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                11 => match token {
                    Token::Char(c @ (b'E' | b'W')) => {
                        rmc.ew_indicator = c;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                13 => match token {
                    Token::FltNum => {
                        rmc.speed_over_ground = self.lexer.buffer().decode_decimal_4_2();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                15 => match token {
                    Token::FltNum => {
                        rmc.course_over_ground = self.lexer.buffer().decode_decimal_4_2();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                17 => match token {
                    Token::Num => {
                        rmc.date = self.lexer.buffer().decode_date();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                19 => match token {
                    Token::FltNum => {
                        rmc.magnetic_variation = self.lexer.buffer().decode_decimal_4_2();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                21 => {
                    if token == Token::Checksum {
                        self.pos += 3;
                        continue;
                    }
                    match token {
                        Token::Char(c @ (b'E' | b'W')) => {
                            rmc.ew_indicator2 = c;
                            self.pos += 1;
                        }
                        Token::Char(b',') => self.pos += 2,
                        _ => self.fail(token),
                    }
                }
                22 => {
                    if token == Token::Checksum {
                        self.pos += 2;
                        continue;
                    }
                    self.separator(token);
                }
                23 => {
                    if token == Token::Checksum {
                        self.pos += 1;
                        continue;
                    }
                    match token {
                        Token::Char(c) if c.is_ascii() => {
                            rmc.mode = c;
                            self.pos += 1;
                        }
                        _ => self.fail(token),
                    }
                }
                24 => self.close(token),
                _ => self.separator(token),
            }
            return;
        }
    }

    #[cfg(feature = "vtg")]
    fn drive_vtg(&mut self, vtg: &mut Vtg, token: Token) {
        loop {
            match self.pos {
                1 => match token {
                    Token::FltNum => {
                        vtg.course = self.lexer.buffer().decode_decimal_4_2();
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                3 => match token {
                    Token::Char(c) if c.is_ascii_alphabetic() => {
                        vtg.reference = c;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                5 => match token {
                    Token::FltNum => {
                        vtg.course2 = self.lexer.buffer().decode_decimal_4_2();
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                7 => match token {
                    Token::Char(c) if c.is_ascii_alphabetic() => {
                        vtg.reference2 = c;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                9 => match token {
                    Token::FltNum => {
                        vtg.speed = self.lexer.buffer().decode_decimal_2_2();
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                11 => match token {
                    Token::Char(c) if c.is_ascii_alphabetic() => {
                        vtg.units = c;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                13 => match token {
                    Token::FltNum => {
                        vtg.speed2 = self.lexer.buffer().decode_decimal_2_2();
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                15 => match token {
                    Token::Char(c) if c.is_ascii_alphabetic() => {
                        vtg.units2 = c;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                16 => {
                    if token == Token::Checksum {
                        self.pos += 2;
                        continue;
                    }
                    self.separator(token);
                }
                17 => {
                    if token == Token::Checksum {
                        self.pos += 1;
                        continue;
                    }
                    match token {
                        Token::Char(c) if c.is_ascii() => {
                            vtg.mode = c;
                            self.pos += 1;
                        }
                        _ => self.fail(token),
                    }
                }
                18 => self.close(token),
                _ => self.separator(token),
            }
            return;
        }
    }

    #[cfg(feature = "zda")]
    fn drive_zda(&mut self, zda: &mut Zda, token: Token) {
        loop {
            match self.pos {
                // Time is transmitted with or without a fractional part.
                1 => match token {
                    Token::Num | Token::FltNum => {
                        zda.utc_time = self.lexer.buffer().decode_utc_time();
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                3 => match token {
                    Token::Num => {
                        zda.day = self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                5 => match token {
                    Token::Num => {
                        zda.month = self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                7 => match token {
                    Token::Num => {
                        zda.year = self.lexer.buffer().decode_i16();
                        self.pos += 1;
                    }
                    _ => self.fail(token),
                },
                9 => match token {
                    Token::Num => {
                        zda.local_zone_hour = self.lexer.buffer().decode_i16() as i8;
                        self.pos += 1;
                    }
                    Token::Char(b',') => self.pos += 2,
                    _ => self.fail(token),
                },
                11 => {
                    if token == Token::Checksum {
                        self.pos += 1;
                        continue;
                    }
                    match token {
                        Token::Num => {
                            zda.local_zone_minutes = self.lexer.buffer().decode_i16() as i8;
                            self.pos += 1;
                        }
                        _ => self.fail(token),
                    }
                }
                12 => self.close(token),
                _ => self.separator(token),
            }
            return;
        }
    }

    #[cfg(feature = "psrf150")]
    fn drive_psrf150(&mut self, body: &mut OkToSend, token: Token) {
        match self.pos {
            1 => match token {
                Token::Num => {
                    body.ok_to_send = self.lexer.buffer().decode_i16() as i8;
                    self.pos += 1;
                }
                _ => self.fail(token),
            },
            2 => self.close(token),
            _ => self.separator(token),
        }
    }

    #[cfg(feature = "psrf151")]
    fn drive_psrf151(&mut self, body: &mut GpsDataEem, token: Token) {
        match self.pos {
            1 => match token {
                Token::Num => {
                    body.gps_time_valid_flag = self.lexer.buffer().decode_i16() as u8;
                    self.pos += 1;
                }
                _ => self.fail(token),
            },
            3 => match token {
                Token::Num => {
                    body.gps_week = self.lexer.buffer().decode_i16() as u16;
                    self.pos += 1;
                }
                _ => self.fail(token),
            },
            5 => match token {
                Token::Num => {
                    body.gps_tow = self.lexer.buffer().decode_i16() as u16;
                    self.pos += 1;
                }
                Token::Char(b',') => self.pos += 2,
                _ => self.fail(token),
            },
            7 => match token {
                Token::Hex8 => {
                    body.eph_req_mask = self.lexer.buffer().decode_hex8();
                    self.pos += 1;
                }
                _ => self.fail(token),
            },
            8 => self.close(token),
            _ => self.separator(token),
        }
    }

    #[cfg(feature = "psrf152")]
    fn drive_psrf152(&mut self, body: &mut EeIntegrity, token: Token) {
        match self.pos {
            1 => match token {
                Token::Hex8 => {
                    body.sat_pos_validity_flag = self.lexer.buffer().decode_hex8();
                    self.pos += 1;
                }
                _ => self.fail(token),
            },
            3 => match token {
                Token::Hex8 => {
                    body.sat_clk_validity_flag = self.lexer.buffer().decode_hex8();
                    self.pos += 1;
                }
                _ => self.fail(token),
            },
            5 => match token {
                Token::Hex8 => {
                    body.sat_health_flag = self.lexer.buffer().decode_hex8();
                    self.pos += 1;
                }
                _ => self.fail(token),
            },
            6 => self.close(token),
            _ => self.separator(token),
        }
    }

    #[cfg(feature = "psrf154")]
    fn drive_psrf154(&mut self, body: &mut EeAck, token: Token) {
        match self.pos {
            1 => match token {
                Token::Num => {
                    body.ack_id = self.lexer.buffer().decode_i16() as i8;
                    self.pos += 1;
                }
                _ => self.fail(token),
            },
            2 => self.close(token),
            _ => self.separator(token),
        }
    }
}
