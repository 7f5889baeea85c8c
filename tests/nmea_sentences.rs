//! Sentence corpus integration tests: every supported sentence decoded from
//! receiver captures, plus the delivery, sentinel, and resynchronisation
//! guarantees the parser makes. The field assertions rely on the
//! digit-exact fixed-point representation, so the suite is not built under
//! the `float` feature.
#![cfg(not(feature = "float"))]
mod helpers;

use helpers::TestStream;
use nmea_sirf::protocol::nmea::messages::*;
use nmea_sirf::protocol::nmea::parser::Parser;
use nmea_sirf::protocol::nmea::values::{Decimal1616, Decimal88, UtcTime};
use nmea_sirf::protocol::nmea::MessageId;

fn parse_one(text: &str) -> Option<Message> {
    let mut parser = Parser::new(TestStream::new(text));
    let mut delivered = None;
    parser.parse(|message| delivered = Some(*message));
    delivered
}

fn parse_gga(text: &str) -> Gga {
    match parse_one(text) {
        Some(Message::Gga(gga)) => gga,
        other => panic!("expected GGA, got {other:?}"),
    }
}

//==================================================================================GGA

#[test]
fn test_parse_gga() {
    let gga =
        parse_gga("$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5E\r\n");
    assert_eq!(gga.ns_indicator, b'N');
    assert_eq!(gga.diff_ref_station_id, 0);
    assert_eq!(gga.satellites_used, 10);
    assert_eq!(
        gga.msl_altitude,
        Decimal88 {
            integer: 27,
            fraction: 0
        }
    );
    assert_eq!(
        gga.geoid_separation,
        Decimal88 {
            integer: -34,
            fraction: 20
        }
    );
}

#[test]
fn test_parse_gga_all_fields_empty() {
    let gga = parse_gga("$GPGGA,,,,,,0,00,,,M,0.0,M,,0000*48\r\n");
    assert_eq!(gga.utc_time, UtcTime::unset());
    assert_eq!(gga.position_fix_indicator, 0);
}

#[test]
fn test_parse_gga_time_only() {
    let gga = parse_gga("$GPGGA,074429.310,,,,,0,00,,,M,0.0,M,,0000*58\r\n");
    assert_eq!(gga.utc_time.hour, 7);
    assert_eq!(gga.utc_time.msec, 310);
}

#[test]
fn test_parse_gga_leading_zero_fields() {
    let gga =
        parse_gga("$GPGGA,104549.04,2447.2038,N,12100.4990,E,1,06,01.7,00078.8,M,0016.3,M,,*5C\r\n");
    assert_eq!(gga.utc_time.hour, 10);
    assert_eq!(gga.utc_time.min, 45);
    assert_eq!(gga.utc_time.sec, 49);
    assert_eq!(
        gga.latitude,
        Decimal1616 {
            integer: 2447,
            fraction: 2038
        }
    );
    assert_eq!(gga.ns_indicator, b'N');
    assert_eq!(
        gga.longitude,
        Decimal1616 {
            integer: 12100,
            fraction: 4990
        }
    );
    assert_eq!(gga.ew_indicator, b'E');
}

#[test]
fn test_parse_gga_fix() {
    let gga =
        parse_gga("$GPGGA,075321.000,3520.4535,N,13929.3265,E,1,06,1.2,70.0,M,39.6,M,,0000*61\r\n");
    assert_eq!(gga.position_fix_indicator, 1);
    assert_eq!(gga.satellites_used, 6);
}

#[test]
fn test_parse_gga_milliseconds() {
    let gga = parse_gga("$GPGGA,075318.181,,,,,0,00,,,M,0.0,M,,0000*56\r\n");
    assert_eq!(gga.utc_time.hour, 7);
    assert_eq!(gga.utc_time.min, 53);
    assert_eq!(gga.utc_time.sec, 18);
    assert_eq!(gga.utc_time.msec, 181);
    assert_eq!(gga.latitude, Decimal1616 { integer: -1, fraction: u16::MAX });
}

//==================================================================================GLL

#[test]
fn test_parse_gll() {
    let Some(Message::Gll(gll)) = parse_one("$GPGLL,3723.2475,N,12158.3416,W,161229.487,A,A*41\r\n")
    else {
        panic!("expected GLL");
    };
    assert_eq!(gll.ns_indicator, b'N');
    assert_eq!(gll.ew_indicator, b'W');
    assert_eq!(gll.status, b'A');
    assert_eq!(gll.utc_time.hour, 16);
}

#[test]
fn test_parse_gll_east() {
    let Some(Message::Gll(gll)) = parse_one("$GPGLL,2447.2073,N,12100.5022,E,104548.04,A,A*65\r\n")
    else {
        panic!("expected GLL");
    };
    assert_eq!(gll.ew_indicator, b'E');
    assert_eq!(
        gll.latitude,
        Decimal1616 {
            integer: 2447,
            fraction: 2073
        }
    );
}

//==================================================================================GSA

#[test]
fn test_parse_gsa() {
    let Some(Message::Gsa(gsa)) =
        parse_one("$GPGSA,A,3,07,02,26,27,09,04,15,,,,,,1.8,1.0,1.5*33\r\n")
    else {
        panic!("expected GSA");
    };
    assert_eq!(gsa.mode1, b'A');
    assert_eq!(gsa.mode2, 3);
    assert_eq!(gsa.satellite_used[0], 7);
    assert_eq!(gsa.satellite_used[6], 15);
    assert_eq!(gsa.satellite_used[7], -1);
    assert_eq!(
        gsa.pdop,
        Decimal88 {
            integer: 1,
            fraction: 80
        }
    );
}

#[test]
fn test_parse_gsa_no_fix() {
    let Some(Message::Gsa(gsa)) = parse_one("$GPGSA,M,1,,,,,,,,,,,,,,,*12\r\n") else {
        panic!("expected GSA");
    };
    assert_eq!(gsa.mode1, b'M');
    assert_eq!(gsa.mode2, 1);
    assert_eq!(gsa.satellite_used, [-1i8; 12]);
    assert_eq!(gsa.vdop, Decimal88 { integer: -1, fraction: u8::MAX });
}

#[test]
fn test_parse_gsa_sparse_channels() {
    let Some(Message::Gsa(gsa)) =
        parse_one("$GPGSA,A,3,26,21,,,09,17,,,,,,,10.8,02.1,10.6*07\r\n")
    else {
        panic!("expected GSA");
    };
    assert_eq!(gsa.satellite_used[0], 26);
    assert_eq!(gsa.satellite_used[2], -1);
    assert_eq!(gsa.satellite_used[4], 9);
    assert_eq!(
        gsa.vdop,
        Decimal88 {
            integer: 10,
            fraction: 60
        }
    );
}

//==================================================================================GSV

#[test]
fn test_parse_gsv() {
    let Some(Message::Gsv(gsv)) =
        parse_one("$GPGSV,2,1,07,07,79,048,42,02,51,062,43,26,36,256,42,27,27,138,42*71\r\n")
    else {
        panic!("expected GSV");
    };
    assert_eq!(gsv.number_of_messages, 2);
    assert_eq!(gsv.message_number, 1);
    assert_eq!(gsv.satellites_in_view, 7);
    assert_eq!(gsv.satellites[0].satellite_id, 7);
    assert_eq!(gsv.satellites[0].elevation, 79);
    assert_eq!(gsv.satellites[0].azimuth, 48);
    assert_eq!(gsv.satellites[0].snr, 42);
    assert_eq!(gsv.satellites[3].azimuth, 138);
}

#[test]
fn test_parse_gsv_final_partial_row() {
    let Some(Message::Gsv(gsv)) =
        parse_one("$GPGSV,2,2,07,09,23,313,42,04,19,159,41,15,12,041,42*41\r\n")
    else {
        panic!("expected GSV");
    };
    assert_eq!(gsv.message_number, 2);
    assert_eq!(gsv.satellites[2].snr, 42);
    assert_eq!(gsv.satellites[3].satellite_id, -1);
}

#[test]
fn test_parse_gsv_empty_snr_rows() {
    let Some(Message::Gsv(gsv)) =
        parse_one("$GPGSV,3,1,12,01,00,000,,02,00,000,,03,00,000,,04,00,000,*7C\r\n")
    else {
        panic!("expected GSV");
    };
    assert_eq!(gsv.satellites[0].satellite_id, 1);
    assert_eq!(gsv.satellites[0].snr, -1);
    assert_eq!(gsv.satellites[3].satellite_id, 4);
}

#[test]
fn test_parse_gsv_group_two() {
    let message = parse_one("$GPGSV,3,2,12,05,00,000,,06,00,000,,07,00,000,,08,00,000,*77\r\n");
    assert_eq!(message.map(|m| m.id()), Some(MessageId::Gsv));
}

#[test]
fn test_parse_gsv_group_three() {
    let message = parse_one("$GPGSV,3,3,12,09,00,000,,10,00,000,,11,00,000,,12,00,000,*71\r\n");
    assert_eq!(message.map(|m| m.id()), Some(MessageId::Gsv));
}

//==================================================================================MSS

#[test]
fn test_parse_mss() {
    let Some(Message::Mss(mss)) = parse_one("$GPMSS,55,27,318.0,100,1*57\r\n") else {
        panic!("expected MSS");
    };
    assert_eq!(mss.signal_strength, 55);
    assert_eq!(mss.signal_to_noise_ratio, 27);
    assert_eq!(mss.beacon_frequency.integer, 318);
    assert_eq!(mss.beacon_frequency.fraction, 0);
    assert_eq!(mss.beacon_bit_rate, 100);
    assert_eq!(mss.channel_number, 1);
}

//==================================================================================RMC

#[test]
fn test_parse_rmc() {
    let Some(Message::Rmc(rmc)) =
        parse_one("$GPRMC,161229.487,A,3723.2475,N,12158.3416,W,0.13,309.62,120598,,*10\r\n")
    else {
        panic!("expected RMC");
    };
    assert_eq!(rmc.date.day, 12);
    assert_eq!(rmc.date.mon, 5);
    assert_eq!(rmc.date.year, 98);
    assert_eq!(rmc.status, b'A');
    assert_eq!(
        rmc.latitude,
        Decimal1616 {
            integer: 3723,
            fraction: 2475
        }
    );
    assert_eq!(rmc.speed_over_ground.integer, 0);
    assert_eq!(rmc.speed_over_ground.fraction, 13);
    assert_eq!(rmc.course_over_ground.integer, 309);
}

#[test]
fn test_parse_rmc_void() {
    let Some(Message::Rmc(rmc)) = parse_one("$GPRMC,,V,,,,,,,,,,N*53\r\n") else {
        panic!("expected RMC");
    };
    assert_eq!(rmc.status, b'V');
    assert_eq!(rmc.mode, b'N');
    assert_eq!(rmc.utc_time, UtcTime::unset());
}

#[test]
fn test_parse_rmc_date_only() {
    let Some(Message::Rmc(rmc)) = parse_one("$GPRMC,074428.310,V,,,,,,,151111,,,N*46\r\n") else {
        panic!("expected RMC");
    };
    assert_eq!(rmc.date.day, 15);
    assert_eq!(rmc.date.mon, 11);
    assert_eq!(rmc.date.year, 11);
}

#[test]
fn test_parse_rmc_with_variation() {
    let Some(Message::Rmc(rmc)) = parse_one(
        "$GPRMC,104549.04,A,2447.2038,N,12100.4990,E,016.0,221.0,250304,003.3,W,A*22\r\n",
    ) else {
        panic!("expected RMC");
    };
    assert_eq!(rmc.magnetic_variation.integer, 3);
    assert_eq!(rmc.magnetic_variation.fraction, 30);
    assert_eq!(rmc.ew_indicator2, b'W');
    assert_eq!(rmc.mode, b'A');
}

//==================================================================================VTG

#[test]
fn test_parse_vtg() {
    let Some(Message::Vtg(vtg)) = parse_one("$GPVTG,309.62,T, ,M,0.13,N,0.2,K,A*23\r\n") else {
        panic!("expected VTG");
    };
    assert_eq!(vtg.course.integer, 309);
    assert_eq!(vtg.course.fraction, 62);
    assert_eq!(vtg.reference, b'T');
    // The magnetic course is blank in this capture.
    assert_eq!(vtg.course2.integer, -1);
    assert_eq!(vtg.reference2, b'M');
    assert_eq!(vtg.speed.integer, 0);
    assert_eq!(vtg.speed.fraction, 13);
    assert_eq!(vtg.mode, b'A');
}

#[test]
fn test_parse_vtg_full() {
    let Some(Message::Vtg(vtg)) = parse_one("$GPVTG,221.0,T,224.3,M,016.0,N,0029.6,K,A*1F\r\n")
    else {
        panic!("expected VTG");
    };
    assert_eq!(vtg.course2.integer, 224);
    assert_eq!(vtg.course2.fraction, 30);
    assert_eq!(vtg.speed2.integer, 29);
    assert_eq!(vtg.speed2.fraction, 60);
}

//==================================================================================ZDA

#[test]
fn test_parse_zda() {
    let Some(Message::Zda(zda)) = parse_one("$GPZDA,181813,14,10,2003,00,00*4F\r\n") else {
        panic!("expected ZDA");
    };
    assert_eq!(zda.utc_time.hour, 18);
    assert_eq!(zda.utc_time.msec, 0);
    assert_eq!(zda.day, 14);
    assert_eq!(zda.month, 10);
    assert_eq!(zda.year, 2003);
    assert_eq!(zda.local_zone_hour, 0);
    assert_eq!(zda.local_zone_minutes, 0);
}

#[test]
fn test_parse_zda_fractional_time() {
    let Some(Message::Zda(zda)) = parse_one("$GPZDA,104548.04,25,03,2004,,*6C\r\n") else {
        panic!("expected ZDA");
    };
    assert_eq!(zda.utc_time.msec, 40);
    assert_eq!(zda.day, 25);
    assert_eq!(zda.year, 2004);
    assert_eq!(zda.local_zone_hour, -1);
    assert_eq!(zda.local_zone_minutes, -1);
}

//==================================================================================PROPRIETARY

#[test]
fn test_parse_psrf150() {
    let Some(Message::OkToSend(body)) = parse_one("$PSRF150,1*3E\r\n") else {
        panic!("expected PSRF150");
    };
    assert_eq!(body.ok_to_send, 1);
}

#[test]
fn test_parse_psrf150_blocked() {
    let Some(Message::OkToSend(body)) = parse_one("$PSRF150,0*3F\r\n") else {
        panic!("expected PSRF150");
    };
    assert_eq!(body.ok_to_send, 0);
}

#[test]
fn test_parse_psrf151() {
    let Some(Message::GpsDataEem(body)) = parse_one("$PSRF151,1,1324,,0x40000001*5A\r\n") else {
        panic!("expected PSRF151");
    };
    assert_eq!(body.gps_time_valid_flag, 1);
    assert_eq!(body.gps_week, 1324);
    assert_eq!(body.gps_tow, u16::MAX);
    assert_eq!(body.eph_req_mask, 0x4000_0001);
}

#[test]
fn test_parse_psrf152() {
    let Some(Message::EeIntegrity(body)) =
        parse_one("$PSRF152,0x10000041,0x10000041,0x10000041*41\r\n")
    else {
        panic!("expected PSRF152");
    };
    assert_eq!(body.sat_pos_validity_flag, 0x1000_0041);
    assert_eq!(body.sat_clk_validity_flag, 0x1000_0041);
    assert_eq!(body.sat_health_flag, 0x1000_0041);
}

#[test]
fn test_parse_psrf154() {
    let Some(Message::EeAck(body)) = parse_one("$PSRF154,107*3D\r\n") else {
        panic!("expected PSRF154");
    };
    assert_eq!(body.ack_id, 107);
}

//==================================================================================STREAMING

#[test]
fn test_parse_stream_in_chunks() {
    let stream = TestStream::new(
        "$GPGSV,3,1,12,04,00,000,22,14,24,171,31,21,18,122,33,23,12,319,25*7F\r\n",
    );
    let mut parser = Parser::new(stream.clone());
    let mut last = None;
    parser.parse(|message| last = Some(*message));
    assert_eq!(last.map(|m| m.id()), Some(MessageId::Gsv));

    for (text, expected) in [
        (
            "$GPGSV,3,2,12,25,07,064,20,27,13,207,20,29,36,048,24,31,71,060,24*7B\r\n",
            MessageId::Gsv,
        ),
        (
            "$GPGSV,3,3,12,26,61,302,,16,37,269,,32,26,177,,57,06,185,*7A\r\n",
            MessageId::Gsv,
        ),
        ("$GPRMC,074020.359,V,,,,,,,150316,,,N*43\r\n", MessageId::Rmc),
        (
            "$GPGGA,074021.359,,,,,0,00,,,M,0.0,M,,0000*59\r\n",
            MessageId::Gga,
        ),
        ("$GPGSA,M,1,,,,,,,,,,,,,,,*12\r\n", MessageId::Gsa),
    ] {
        last = None;
        stream.set(text);
        parser.parse(|message| last = Some(*message));
        assert_eq!(last.map(|m| m.id()), Some(expected));
    }
}

#[test]
fn test_parse_contiguous_stream() {
    let mut parser = Parser::new(TestStream::new(concat!(
        "$GPGSV,3,1,12,04,00,000,22,14,24,171,31,21,18,122,33,23,12,319,25*7F\r\n",
        "$GPGSV,3,2,12,25,07,064,20,27,13,207,20,29,36,048,24,31,71,060,24*7B\r\n",
        "$GPGSV,3,3,12,26,61,302,,16,37,269,,32,26,177,,57,06,185,*7A\r\n",
        "$GPRMC,074020.359,V,,,,,,,150316,,,N*43\r\n",
        "$GPGGA,074021.359,,,,,0,00,,,M,0.0,M,,0000*59\r\n",
        "$GPGSA,M,1,,,,,,,,,,,,,,,*12\r\n",
    )));
    let mut ids = Vec::new();
    parser.parse(|message| ids.push(message.id()));
    assert_eq!(
        ids,
        [
            MessageId::Gsv,
            MessageId::Gsv,
            MessageId::Gsv,
            MessageId::Rmc,
            MessageId::Gga,
            MessageId::Gsa,
        ]
    );
}

#[test]
fn test_checksum_mismatch_is_silent() {
    // Same GGA with the last checksum digit off by one.
    let text = "$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5F\r\n";
    assert!(parse_one(text).is_none());
}

#[test]
fn test_resynchronisation_after_invalid_sentence() {
    let mut parser = Parser::new(TestStream::new(concat!(
        "$GPGGA,not-a-sentence@@\r\n",
        "$PSRF154,107*3D\r\n",
    )));
    let mut ids = Vec::new();
    parser.parse(|message| ids.push(message.id()));
    assert_eq!(ids, [MessageId::Psrf154]);
}

#[test]
fn test_oversized_field_forces_resynchronisation() {
    let mut parser = Parser::new(TestStream::new(concat!(
        "$GPGGA,0021530000000000000000000000000000000000000053,,*00\r\n",
        "$PSRF150,1*3E\r\n",
    )));
    let mut ids = Vec::new();
    parser.parse(|message| ids.push(message.id()));
    assert_eq!(ids, [MessageId::Psrf150]);
}
