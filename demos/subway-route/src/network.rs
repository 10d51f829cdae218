//! Embedded demo network.
//!
//! A slice of southern Seoul: Line 2 west→east, Line 3 and Shinbundang
//! north→south, Line 9 express.  Distances are in hundreds of metres.

use std::io::Cursor;

use subway_service::{ServiceResult, SubwayNetwork, load_network_reader};

pub const NETWORK_CSV: &str = "\
line_id,line_name,line_color,up_station_id,up_station_name,down_station_id,down_station_name,distance
2,Line 2,#00A84D,1,Seocho,2,Gyodae,7
2,Line 2,#00A84D,2,Gyodae,3,Gangnam,12
2,Line 2,#00A84D,3,Gangnam,4,Yeoksam,8
2,Line 2,#00A84D,4,Yeoksam,5,Seolleung,9
2,Line 2,#00A84D,5,Seolleung,6,Samseong,8
3,Line 3,#EF7C1C,7,Sinsa,8,Express Bus Terminal,25
3,Line 3,#EF7C1C,8,Express Bus Terminal,2,Gyodae,16
3,Line 3,#EF7C1C,2,Gyodae,9,Nambu Bus Terminal,10
3,Line 3,#EF7C1C,9,Nambu Bus Terminal,10,Yangjae,14
77,Shinbundang,#D4003B,3,Gangnam,10,Yangjae,31
77,Shinbundang,#D4003B,10,Yangjae,11,Yangjae Citizen's Forest,16
9,Line 9,#BDB092,8,Express Bus Terminal,12,Sinnonhyeon,19
9,Line 9,#BDB092,12,Sinnonhyeon,5,Seolleung,27
";

pub fn build_network() -> ServiceResult<SubwayNetwork> {
    load_network_reader(Cursor::new(NETWORK_CSV))
}
